//! # routehub-core
//!
//! Core crate for RouteHub. Contains the storage provider trait,
//! configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other RouteHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
