//! # dochub-service
//!
//! Operations over the document hub tree. Each service is a small,
//! configuration-holding struct whose methods take the [`FolderTree`]
//! they act on; [`DocumentHub`] owns the tree and is the single entry
//! point for every mutation.
//!
//! [`FolderTree`]: dochub_entity::FolderTree

pub mod file;
pub mod folder;
pub mod hub;
pub mod share;

mod naming;

pub use file::{FileService, SearchService, UploadService, ViewQuery};
pub use folder::{Breadcrumb, FolderService, TreeService, flatten_forest};
pub use hub::DocumentHub;
pub use share::{ShareIntent, ShareService};
