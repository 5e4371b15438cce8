//! Folder rename and permission listing.

use tracing::info;

use dochub_core::result::AppResult;
use dochub_core::types::FolderId;
use dochub_entity::{FolderPermission, FolderTree};

use crate::naming::clean_name;

/// Manages folder updates.
#[derive(Debug, Clone, Default)]
pub struct FolderService;

impl FolderService {
    /// Creates a new folder service.
    pub fn new() -> Self {
        Self
    }

    /// Renames a folder in place and returns the previous name.
    ///
    /// Sibling names are not checked for uniqueness. Children, siblings and
    /// the folder's id are untouched.
    pub fn rename_folder(
        &self,
        tree: &mut FolderTree,
        folder_id: &FolderId,
        new_name: &str,
    ) -> AppResult<String> {
        let name = clean_name("Folder", new_name)?;
        let old_name = tree.rename_folder(folder_id, name.clone())?;

        info!(
            folder_id = %folder_id,
            old_name = %old_name,
            new_name = %name,
            "Folder renamed"
        );

        Ok(old_name)
    }

    /// Lists the collaborators a folder was seeded with.
    pub fn permissions(
        &self,
        tree: &FolderTree,
        folder_id: &FolderId,
    ) -> AppResult<Vec<FolderPermission>> {
        let node = tree.require_folder(folder_id)?;
        Ok(node.permissions.clone().unwrap_or_default())
    }
}
