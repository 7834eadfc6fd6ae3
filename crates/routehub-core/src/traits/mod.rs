//! Core traits defined in `routehub-core` and implemented by other crates.

pub mod storage;

pub use storage::StorageProvider;
