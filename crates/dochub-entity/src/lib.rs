//! # dochub-entity
//!
//! Domain entities for the employee Document Hub. The nested
//! [`folder::FolderItem`] form is how trees are seeded, imported and
//! exported; [`folder::FolderTree`] is the id-keyed arena every
//! operation actually runs against.

pub mod file;
pub mod folder;
pub mod node;
pub mod permission;

pub use file::{FileAccess, FileItem, UploadBlob};
pub use folder::{FolderItem, FolderNode, FolderSummary, FolderTree};
pub use node::NodeRef;
pub use permission::{FolderPermission, PermissionRole};
