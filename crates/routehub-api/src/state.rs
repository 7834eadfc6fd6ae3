//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use routehub_core::config::AppConfig;
use routehub_core::traits::StorageProvider;
use routehub_service::{DocService, FolderService, RouteService, RouteStore, WorkspaceService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Folder and route store
    pub store: Arc<RouteStore>,

    // ── Services ─────────────────────────────────────────────
    /// Folder service
    pub folder_service: Arc<FolderService>,
    /// Saved route service
    pub route_service: Arc<RouteService>,
    /// OpenAPI document service
    pub doc_service: Arc<DocService>,
    /// Workspace export/import service
    pub workspace_service: Arc<WorkspaceService>,
}

impl AppState {
    /// Wires the store and every service over a storage provider.
    pub fn new(config: AppConfig, storage: Arc<dyn StorageProvider>) -> Self {
        let store = Arc::new(RouteStore::new(storage));
        Self {
            folder_service: Arc::new(FolderService::new(Arc::clone(&store))),
            route_service: Arc::new(RouteService::new(Arc::clone(&store))),
            doc_service: Arc::new(DocService::new(Arc::clone(&store), config.docs.clone())),
            workspace_service: Arc::new(WorkspaceService::new(Arc::clone(&store))),
            config: Arc::new(config),
            store,
        }
    }
}
