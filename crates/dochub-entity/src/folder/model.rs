//! Nested folder model used for seeding, import and export.

use serde::{Deserialize, Serialize};

use dochub_core::types::FolderId;

use crate::file::FileItem;
use crate::permission::FolderPermission;

/// A folder together with everything it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderItem {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Child folders, in display order.
    #[serde(default)]
    pub folders: Vec<FolderItem>,
    /// Files directly in this folder, in display order.
    #[serde(default)]
    pub files: Vec<FileItem>,
    /// Collaborators the folder is shared with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<FolderPermission>>,
}

impl FolderItem {
    /// Create an empty folder.
    pub fn new(id: impl Into<FolderId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            folders: Vec::new(),
            files: Vec::new(),
            permissions: None,
        }
    }

    /// Builder-style: add a child folder.
    pub fn with_folder(mut self, folder: FolderItem) -> Self {
        self.folders.push(folder);
        self
    }

    /// Builder-style: add a file.
    pub fn with_file(mut self, file: FileItem) -> Self {
        self.files.push(file);
        self
    }

    /// Builder-style: add a collaborator.
    pub fn with_permission(mut self, permission: FolderPermission) -> Self {
        self.permissions.get_or_insert_with(Vec::new).push(permission);
        self
    }

    /// Count every file in this folder and its descendants.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.folders.iter().map(FolderItem::file_count).sum::<usize>()
    }
}
