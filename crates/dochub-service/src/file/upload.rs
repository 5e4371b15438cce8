//! File upload into a selected folder.
//!
//! Only the picker metadata (name and byte size) is consumed. New records
//! get a generated id, a formatted size, `Private` access, and a
//! `folder_path` holding the target folder's own name. That stored path is
//! not the full ancestor chain; views recompute it on flatten.

use tracing::{info, warn};

use dochub_core::AppError;
use dochub_core::config::HubConfig;
use dochub_core::result::AppResult;
use dochub_core::types::{FileId, FolderId};
use dochub_entity::file::format_size;
use dochub_entity::{FileAccess, FileItem, FolderTree, UploadBlob};

/// Appends picked files to a folder.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Largest accepted blob, in bytes.
    max_upload_size_bytes: u64,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(config: &HubConfig) -> Self {
        Self {
            max_upload_size_bytes: config.max_upload_size_bytes,
        }
    }

    /// Uploads a batch into `target` and returns the new records.
    ///
    /// The batch is all-or-nothing: any invalid blob rejects the whole
    /// upload and the folder is left as it was.
    pub fn upload(
        &self,
        tree: &mut FolderTree,
        target: Option<&FolderId>,
        blobs: Vec<UploadBlob>,
    ) -> AppResult<Vec<FileItem>> {
        let Some(folder_id) = target else {
            warn!("Upload rejected: no folder selected");
            return Err(AppError::validation("No folder selected"));
        };

        let folder_name = tree.require_folder(folder_id)?.name.clone();

        if blobs.is_empty() {
            return Err(AppError::validation("No files selected for upload"));
        }

        let total_bytes = batch_size(blobs.iter().map(|b| b.size_bytes))?;
        let mut items = Vec::with_capacity(blobs.len());
        for blob in blobs {
            items.push(self.build_item(blob, &folder_name)?);
        }

        tree.append_files(folder_id, items.clone())?;

        info!(
            folder_id = %folder_id,
            folder = %folder_name,
            count = items.len(),
            total_bytes,
            "Files uploaded"
        );

        Ok(items)
    }

    fn build_item(&self, blob: UploadBlob, folder_name: &str) -> AppResult<FileItem> {
        let name = blob.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("File name cannot be empty"));
        }
        if blob.size_bytes > self.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "'{}' is {} which exceeds the {} upload limit",
                name,
                format_size(blob.size_bytes),
                format_size(self.max_upload_size_bytes)
            )));
        }

        Ok(FileItem {
            id: FileId::generate(),
            name: name.to_string(),
            size: format_size(blob.size_bytes),
            access: FileAccess::Private,
            folder_path: folder_name.to_string(),
        })
    }
}

/// Total byte size of a batch. A sum past `u64::MAX` is a validation error.
pub fn batch_size(sizes: impl IntoIterator<Item = u64>) -> AppResult<u64> {
    sizes
        .into_iter()
        .try_fold(0u64, |total, size| total.checked_add(size))
        .ok_or_else(|| AppError::validation("Upload batch is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dochub_core::error::ErrorKind;
    use dochub_entity::FolderItem;

    fn tree() -> FolderTree {
        FolderTree::from_forest(vec![FolderItem::new("2", "HR").with_folder(
            FolderItem::new("2-1", "Payslips").with_file(FileItem {
                id: FileId::from("f2"),
                name: "Payslip_Jan.pdf".to_string(),
                size: "220.00 KB".to_string(),
                access: FileAccess::Shared,
                folder_path: "HR / Payslips".to_string(),
            }),
        )])
        .expect("build")
    }

    #[test]
    fn test_upload_appends_after_existing() {
        let mut tree = tree();
        let target = FolderId::from("2-1");
        let created = UploadService::new(&HubConfig::default())
            .upload(
                &mut tree,
                Some(&target),
                vec![
                    UploadBlob::new("Payslip_Feb.pdf", 2048),
                    UploadBlob::new("Payslip_Mar.pdf", 100),
                ],
            )
            .expect("upload");

        assert_eq!(created.len(), 2);
        assert_ne!(created[0].id, created[1].id);
        assert_eq!(created[0].size, "2.00 KB");
        assert_eq!(created[1].size, "100 B");
        assert!(created.iter().all(|f| f.access == FileAccess::Private));
        assert!(created.iter().all(|f| f.folder_path == "Payslips"));

        let node = tree.require_folder(&target).expect("folder");
        assert_eq!(node.files.len(), 3);
        assert_eq!(node.files[0].as_str(), "f2");
        assert_eq!(node.files[1], created[0].id);
    }

    #[test]
    fn test_upload_without_folder_is_rejected() {
        let mut tree = tree();
        let err = UploadService::new(&HubConfig::default())
            .upload(&mut tree, None, vec![UploadBlob::new("a.pdf", 1)])
            .expect_err("no folder");
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_oversized_blob_rejects_whole_batch() {
        let mut tree = tree();
        let config = HubConfig {
            max_upload_size_bytes: 1024,
            ..Default::default()
        };
        let target = FolderId::from("2");
        let err = UploadService::new(&config)
            .upload(
                &mut tree,
                Some(&target),
                vec![UploadBlob::new("ok.pdf", 10), UploadBlob::new("big.pdf", 4096)],
            )
            .expect_err("too big");
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(tree.require_folder(&target).expect("folder").files.is_empty());
    }

    #[test]
    fn test_unknown_folder_is_not_found() {
        let mut tree = tree();
        let err = UploadService::new(&HubConfig::default())
            .upload(&mut tree, Some(&FolderId::from("9")), vec![UploadBlob::new("a", 1)])
            .expect_err("missing");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let mut tree = tree();
        let target = FolderId::from("2-1");
        let err = UploadService::new(&HubConfig::default())
            .upload(&mut tree, Some(&target), Vec::new())
            .expect_err("empty");
        assert_eq!(err.kind, ErrorKind::Validation);
        let node = tree.require_folder(&target).expect("folder");
        assert_eq!(node.files, vec![FileId::from("f2")]);
    }

    #[test]
    fn test_blank_name_rejects_whole_batch() {
        let mut tree = tree();
        let target = FolderId::from("2-1");
        let err = UploadService::new(&HubConfig::default())
            .upload(
                &mut tree,
                Some(&target),
                vec![UploadBlob::new("Payslip_Feb.pdf", 10), UploadBlob::new("   ", 10)],
            )
            .expect_err("blank");
        assert_eq!(err.kind, ErrorKind::Validation);
        let node = tree.require_folder(&target).expect("folder");
        assert_eq!(node.files, vec![FileId::from("f2")]);
    }

    #[test]
    fn test_overflowing_batch_size_is_rejected() {
        let mut tree = tree();
        let config = HubConfig {
            max_upload_size_bytes: u64::MAX,
            ..Default::default()
        };
        let target = FolderId::from("2");
        let err = UploadService::new(&config)
            .upload(
                &mut tree,
                Some(&target),
                vec![UploadBlob::new("a.pdf", u64::MAX), UploadBlob::new("b.pdf", 1)],
            )
            .expect_err("overflow");
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(tree.require_folder(&target).expect("folder").files.is_empty());
    }

    #[test]
    fn test_batch_size() {
        assert_eq!(batch_size([1, 2, 3]).expect("sum"), 6);
        assert_eq!(batch_size(Vec::new()).expect("sum"), 0);
        assert!(batch_size([u64::MAX, 1]).is_err());
    }
}
