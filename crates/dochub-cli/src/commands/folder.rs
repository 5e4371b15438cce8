//! Folder details command.

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use dochub_core::error::AppError;
use dochub_core::types::FolderId;
use dochub_entity::{FolderPermission, FolderSummary};
use dochub_service::DocumentHub;

/// Arguments for the folder command
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder ID
    pub id: String,
}

#[derive(Debug, Serialize)]
struct FolderDetails {
    summary: FolderSummary,
    permissions: Vec<FolderPermission>,
}

/// Execute the folder command
pub fn execute(args: &FolderArgs, hub: &DocumentHub, format: OutputFormat) -> Result<(), AppError> {
    let id: FolderId = args.id.parse()?;
    let details = FolderDetails {
        summary: hub.summary(&id)?,
        permissions: hub.permissions(&id)?,
    };

    if format == OutputFormat::Json {
        output::print_json(&details);
        return Ok(());
    }

    let summary = &details.summary;
    output::print_kv("ID", summary.id.as_str());
    output::print_kv("Name", &summary.name);
    output::print_kv("Path", &summary.path);
    output::print_kv("Depth", &summary.depth.to_string());
    output::print_kv("Subfolders", &summary.child_count.to_string());
    output::print_kv("Files", &summary.file_count.to_string());
    output::print_kv("Files (recursive)", &summary.total_files.to_string());
    if details.permissions.is_empty() {
        output::print_kv("Shared with", "nobody");
    }
    for perm in &details.permissions {
        output::print_kv("Shared with", &format!("{} ({})", perm.email, perm.role));
    }

    Ok(())
}
