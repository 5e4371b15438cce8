//! # dochub-core
//!
//! Core crate for the employee Document Hub. Contains configuration
//! schemas, typed identifiers, domain events, pagination types, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other DocHub crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
