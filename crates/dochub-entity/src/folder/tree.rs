//! Id-keyed arena holding the folder/file hierarchy.
//!
//! Nodes live in flat maps and refer to their parent and children by id,
//! so a view never holds a reference that a mutation could leave stale.
//! Child order is kept in the `folders`/`files` vectors of each node.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use dochub_core::AppError;
use dochub_core::result::AppResult;
use dochub_core::types::{FileId, FolderId};

use super::PATH_SEPARATOR;
use super::model::FolderItem;
use crate::file::FileItem;
use crate::permission::FolderPermission;

/// A folder stored in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Parent folder, `None` for roots.
    pub parent: Option<FolderId>,
    /// Child folder IDs in display order.
    pub folders: Vec<FolderId>,
    /// Direct file IDs in display order.
    pub files: Vec<FileId>,
    /// Display-only collaborator list.
    pub permissions: Option<Vec<FolderPermission>>,
}

/// A file stored in the arena together with its owning folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// The file record as last written.
    pub item: FileItem,
    /// Folder that owns the file.
    pub folder_id: FolderId,
}

/// Counts and location of a single folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSummary {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Display path from the root, including this folder.
    pub path: String,
    /// Depth level (0 for roots).
    pub depth: usize,
    /// Number of child folders.
    pub child_count: usize,
    /// Number of files directly in this folder.
    pub file_count: usize,
    /// Number of files in this folder and every descendant.
    pub total_files: usize,
}

/// The complete folder forest.
#[derive(Debug, Clone, Default)]
pub struct FolderTree {
    roots: Vec<FolderId>,
    folders: HashMap<FolderId, FolderNode>,
    files: HashMap<FileId, StoredFile>,
}

impl FolderTree {
    /// Create an empty tree.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the arena from a nested forest.
    ///
    /// Fails with a conflict if any folder id or file id appears twice.
    pub fn from_forest(forest: Vec<FolderItem>) -> AppResult<Self> {
        let mut tree = Self::default();
        for item in forest {
            let id = tree.insert_folder(item, None)?;
            tree.roots.push(id);
        }

        debug!(
            roots = tree.roots.len(),
            folders = tree.folders.len(),
            files = tree.files.len(),
            "Folder tree built"
        );

        Ok(tree)
    }

    fn insert_folder(&mut self, item: FolderItem, parent: Option<FolderId>) -> AppResult<FolderId> {
        let FolderItem {
            id,
            name,
            folders,
            files,
            permissions,
        } = item;

        if self.folders.contains_key(&id) {
            return Err(AppError::conflict(format!("Duplicate folder id '{id}'")));
        }

        let mut file_ids = Vec::with_capacity(files.len());
        for file in files {
            if self.files.contains_key(&file.id) {
                return Err(AppError::conflict(format!("Duplicate file id '{}'", file.id)));
            }
            file_ids.push(file.id.clone());
            self.files.insert(
                file.id.clone(),
                StoredFile {
                    item: file,
                    folder_id: id.clone(),
                },
            );
        }

        self.folders.insert(
            id.clone(),
            FolderNode {
                id: id.clone(),
                name,
                parent,
                folders: Vec::new(),
                files: file_ids,
                permissions,
            },
        );

        let mut child_ids = Vec::with_capacity(folders.len());
        for child in folders {
            child_ids.push(self.insert_folder(child, Some(id.clone()))?);
        }
        if let Some(node) = self.folders.get_mut(&id) {
            node.folders = child_ids;
        }

        Ok(id)
    }

    /// Rebuild the nested forest, preserving display order.
    pub fn to_forest(&self) -> Vec<FolderItem> {
        self.roots
            .iter()
            .filter_map(|id| self.build_item(id))
            .collect()
    }

    fn build_item(&self, id: &FolderId) -> Option<FolderItem> {
        let node = self.folders.get(id)?;
        Some(FolderItem {
            id: node.id.clone(),
            name: node.name.clone(),
            folders: node
                .folders
                .iter()
                .filter_map(|child| self.build_item(child))
                .collect(),
            files: self.folder_files(node).cloned().collect(),
            permissions: node.permissions.clone(),
        })
    }

    /// Root folder IDs in display order.
    pub fn roots(&self) -> &[FolderId] {
        &self.roots
    }

    /// Root folders in display order.
    pub fn root_nodes(&self) -> impl Iterator<Item = &FolderNode> {
        self.roots.iter().filter_map(|id| self.folders.get(id))
    }

    /// Look up a folder, failing with not-found.
    pub fn require_folder(&self, id: &FolderId) -> AppResult<&FolderNode> {
        self.folders
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("Folder '{id}' not found")))
    }

    /// Look up a file, failing with not-found.
    pub fn require_file(&self, id: &FileId) -> AppResult<&StoredFile> {
        self.files
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("File '{id}' not found")))
    }

    /// Child folders of a node in display order.
    pub fn child_folders<'a>(&'a self, node: &'a FolderNode) -> impl Iterator<Item = &'a FolderNode> {
        node.folders.iter().filter_map(|id| self.folders.get(id))
    }

    /// Files directly in a node in display order.
    pub fn folder_files<'a>(&'a self, node: &'a FolderNode) -> impl Iterator<Item = &'a FileItem> {
        node.files
            .iter()
            .filter_map(|id| self.files.get(id))
            .map(|stored| &stored.item)
    }

    /// Total number of folders.
    pub fn total_folders(&self) -> usize {
        self.folders.len()
    }

    /// Total number of files.
    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    /// Folders from the root down to `id`, inclusive.
    pub fn ancestors(&self, id: &FolderId) -> AppResult<Vec<&FolderNode>> {
        let mut chain = Vec::new();
        let mut current = Some(self.require_folder(id)?);

        while let Some(node) = current {
            chain.push(node);
            if chain.len() > self.folders.len() {
                return Err(AppError::internal(format!(
                    "Folder '{id}' has a cyclic parent chain"
                )));
            }
            current = match &node.parent {
                Some(parent) => Some(self.require_folder(parent)?),
                None => None,
            };
        }

        chain.reverse();
        Ok(chain)
    }

    /// Display path of a folder from its root, e.g. `HR / Payslips`.
    pub fn display_path(&self, id: &FolderId) -> AppResult<String> {
        let names: Vec<&str> = self
            .ancestors(id)?
            .into_iter()
            .map(|node| node.name.as_str())
            .collect();
        Ok(names.join(PATH_SEPARATOR))
    }

    /// Counts and location of a folder.
    pub fn summary(&self, id: &FolderId) -> AppResult<FolderSummary> {
        let chain = self.ancestors(id)?;
        let node = self.require_folder(id)?;

        let mut total_files = 0;
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            total_files += current.files.len();
            stack.extend(self.child_folders(current));
        }

        Ok(FolderSummary {
            id: node.id.clone(),
            name: node.name.clone(),
            path: chain
                .iter()
                .map(|n| n.name.as_str())
                .collect::<Vec<_>>()
                .join(PATH_SEPARATOR),
            depth: chain.len() - 1,
            child_count: node.folders.len(),
            file_count: node.files.len(),
            total_files,
        })
    }

    /// Append files to a folder, in order.
    ///
    /// The batch is applied atomically: if the folder is missing or any id
    /// collides, nothing is appended.
    pub fn append_files(&mut self, folder_id: &FolderId, files: Vec<FileItem>) -> AppResult<()> {
        self.require_folder(folder_id)?;

        for (index, file) in files.iter().enumerate() {
            let repeated = files[..index].iter().any(|other| other.id == file.id);
            if repeated || self.files.contains_key(&file.id) {
                return Err(AppError::conflict(format!("Duplicate file id '{}'", file.id)));
            }
        }

        let ids: Vec<FileId> = files.iter().map(|f| f.id.clone()).collect();
        for file in files {
            self.files.insert(
                file.id.clone(),
                StoredFile {
                    item: file,
                    folder_id: folder_id.clone(),
                },
            );
        }
        if let Some(node) = self.folders.get_mut(folder_id) {
            node.files.extend(ids);
        }

        Ok(())
    }

    /// Set a folder's name, returning the previous one.
    pub fn rename_folder(&mut self, id: &FolderId, name: String) -> AppResult<String> {
        let node = self
            .folders
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Folder '{id}' not found")))?;
        Ok(std::mem::replace(&mut node.name, name))
    }

    /// Set a file's name, returning the previous one.
    pub fn rename_file(&mut self, id: &FileId, name: String) -> AppResult<String> {
        let stored = self
            .files
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("File '{id}' not found")))?;
        Ok(std::mem::replace(&mut stored.item.name, name))
    }
}
