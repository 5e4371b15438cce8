//! File upload CLI command.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use dochub_core::error::AppError;
use dochub_core::types::FolderId;
use dochub_entity::UploadBlob;
use dochub_service::DocumentHub;

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Local files to upload
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Target folder ID
    #[arg(long)]
    pub folder: Option<String>,
}

/// Uploaded file row
#[derive(Debug, Serialize, Tabled)]
struct UploadRow {
    /// File ID
    id: String,
    /// Name
    name: String,
    /// Size
    size: String,
    /// Stored folder path
    folder: String,
}

/// Execute the upload command
pub async fn execute(
    args: &UploadArgs,
    hub: &mut DocumentHub,
    format: OutputFormat,
) -> Result<(), AppError> {
    let target = args
        .folder
        .as_deref()
        .map(str::parse::<FolderId>)
        .transpose()?;

    let mut blobs = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            AppError::not_found(format!("File not found: {} ({e})", path.display()))
        })?;
        if !metadata.is_file() {
            return Err(AppError::validation(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }
        blobs.push(UploadBlob::new(blob_name(path)?, metadata.len()));
    }

    let created = hub.upload(target.as_ref(), blobs)?;

    let rows: Vec<UploadRow> = created
        .iter()
        .map(|f| UploadRow {
            id: f.id.to_string(),
            name: f.name.clone(),
            size: f.size.clone(),
            folder: f.folder_path.clone(),
        })
        .collect();
    output::print_list(&rows, format);
    if format == OutputFormat::Table {
        output::print_success(&format!("{} file(s) uploaded", created.len()));
    }

    Ok(())
}

/// Helper: the picker name of a local file
fn blob_name(path: &Path) -> Result<String, AppError> {
    let name = path
        .file_name()
        .ok_or_else(|| AppError::validation(format!("No file name in {}", path.display())))?;
    name.to_str().map(str::to_string).ok_or_else(|| {
        AppError::validation(format!("File name is not valid UTF-8: {}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dochub_core::error::ErrorKind;

    #[test]
    fn test_blob_name_uses_file_name() {
        let name = blob_name(Path::new("scans/Passport.pdf")).expect("name");
        assert_eq!(name, "Passport.pdf");
    }

    #[test]
    fn test_blob_name_without_file_name() {
        let err = blob_name(Path::new("..")).expect_err("no name");
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[cfg(unix)]
    #[test]
    fn test_blob_name_rejects_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"scans/bad\xff.pdf"));
        let err = blob_name(path).expect_err("non-utf8");
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
