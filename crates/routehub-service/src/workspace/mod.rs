//! Workspace export and import.

pub mod service;

pub use service::WorkspaceService;
