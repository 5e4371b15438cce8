//! File upload, rename, and search services.

pub mod search;
pub mod service;
pub mod upload;

pub use search::{SearchService, ViewQuery};
pub use service::FileService;
pub use upload::{UploadService, batch_size};
