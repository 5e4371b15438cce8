//! Share requests.

pub mod service;

pub use service::{ShareIntent, ShareService};
