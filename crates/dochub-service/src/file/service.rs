//! File rename.

use tracing::info;

use dochub_core::result::AppResult;
use dochub_core::types::FileId;
use dochub_entity::FolderTree;

use crate::naming::clean_name;

/// Manages file updates.
#[derive(Debug, Clone, Default)]
pub struct FileService;

impl FileService {
    /// Creates a new file service.
    pub fn new() -> Self {
        Self
    }

    /// Renames a file in place and returns the previous name.
    pub fn rename_file(
        &self,
        tree: &mut FolderTree,
        file_id: &FileId,
        new_name: &str,
    ) -> AppResult<String> {
        let name = clean_name("File", new_name)?;
        let old_name = tree.rename_file(file_id, name.clone())?;

        info!(
            file_id = %file_id,
            old_name = %old_name,
            new_name = %name,
            "File renamed"
        );

        Ok(old_name)
    }
}
