//! File grid listing.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use dochub_core::error::AppError;
use dochub_core::types::FolderId;
use dochub_entity::FileItem;
use dochub_service::{DocumentHub, ViewQuery};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list files under this folder
    #[arg(long)]
    pub folder: Option<String>,

    /// Case-insensitive name filter
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page number (1-based)
    #[arg(short, long, default_value = "1")]
    pub page: u64,

    /// Page size (defaults to hub.page_size)
    #[arg(long)]
    pub page_size: Option<u64>,
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    /// File ID
    id: String,
    /// Name
    name: String,
    /// Folder path
    folder: String,
    /// Type
    #[tabled(rename = "type")]
    kind: String,
    /// Size
    size: String,
    /// Access
    access: String,
}

impl From<&FileItem> for FileRow {
    fn from(file: &FileItem) -> Self {
        Self {
            id: file.id.to_string(),
            name: file.name.clone(),
            folder: file.folder_path.clone(),
            kind: file.extension().unwrap_or_else(|| "-".to_string()),
            size: file.size.clone(),
            access: file.access.to_string(),
        }
    }
}

/// Execute the list command
pub fn execute(args: &ListArgs, hub: &DocumentHub, format: OutputFormat) -> Result<(), AppError> {
    let query = ViewQuery {
        scope: args
            .folder
            .as_deref()
            .map(str::parse::<FolderId>)
            .transpose()?,
        search: args.search.clone(),
        page: Some(args.page),
        page_size: args.page_size,
    };

    let page = hub.view(&query)?;

    match format {
        OutputFormat::Json => output::print_json(&page),
        OutputFormat::Table => {
            let rows: Vec<FileRow> = page.items.iter().map(FileRow::from).collect();
            output::print_list(&rows, format);
            output::print_kv(
                "Page",
                &format!("{} of {} ({} files)", page.page, page.total_pages, page.total_items),
            );
        }
    }

    Ok(())
}
