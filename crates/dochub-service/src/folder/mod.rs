//! Folder tree flattening and folder management.

pub mod service;
pub mod tree;

pub use service::FolderService;
pub use tree::{Breadcrumb, TreeService, flatten_forest};
