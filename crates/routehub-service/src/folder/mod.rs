//! Folder management service.

pub mod service;

pub use service::{CreateFolderRequest, FolderService, RenameFolderRequest};
