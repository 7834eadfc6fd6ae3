//! # routehub-service
//!
//! Application services for RouteHub. [`RouteStore`] owns persistence and
//! every folder/route invariant; the services on top of it are thin use-case
//! facades shared by the HTTP API and the CLI.
//!
//! Services follow constructor injection: the store is handed in as an
//! `Arc` at construction time.

pub mod docs;
pub mod folder;
pub mod route;
pub mod store;
pub mod workspace;

pub use docs::DocService;
pub use folder::{CreateFolderRequest, FolderService, RenameFolderRequest};
pub use route::{RouteService, SaveMode};
pub use store::RouteStore;
pub use workspace::WorkspaceService;
