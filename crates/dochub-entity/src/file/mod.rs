//! File domain entities.

pub mod model;
pub mod size;

pub use model::{FileAccess, FileItem, UploadBlob};
pub use size::format_size;
