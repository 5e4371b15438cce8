//! Folder domain entities.

pub mod model;
pub mod seed;
pub mod tree;

pub use model::FolderItem;
pub use tree::{FolderNode, FolderSummary, FolderTree, StoredFile};

/// Separator placed between folder names in a display path.
pub const PATH_SEPARATOR: &str = " / ";
