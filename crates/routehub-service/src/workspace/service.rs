//! Whole-store snapshots.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use routehub_core::result::AppResult;
use routehub_entity::folder::{folder_or_root, is_root};
use routehub_entity::workspace::{ImportFailure, ImportReport, WorkspaceSnapshot};

use crate::store::RouteStore;

/// Exports and imports the complete set of folders and routes.
#[derive(Debug, Clone)]
pub struct WorkspaceService {
    store: Arc<RouteStore>,
}

impl WorkspaceService {
    /// Creates a new workspace service.
    pub fn new(store: Arc<RouteStore>) -> Self {
        Self { store }
    }

    /// Snapshot of every folder, empty ones included, `root` first.
    pub async fn export(&self) -> AppResult<WorkspaceSnapshot> {
        let folders = self.store.all_folders().await?;
        let snapshot = WorkspaceSnapshot::from_folders(folders, Utc::now());
        info!(
            folders = snapshot.folders.len(),
            routes = snapshot.route_count(),
            "Workspace exported"
        );
        Ok(snapshot)
    }

    /// Replace the store contents with a snapshot.
    ///
    /// The snapshot is validated as a whole first; an invalid snapshot is
    /// rejected without touching the store. After the store is cleared,
    /// folders and routes are recreated in snapshot order and each failure
    /// is recorded in the report instead of aborting the import. Routes get
    /// fresh ids.
    pub async fn import(&self, snapshot: WorkspaceSnapshot) -> AppResult<ImportReport> {
        snapshot.validate()?;
        self.store.clear().await?;

        let mut report = ImportReport::default();
        for folder in &snapshot.folders {
            let name = folder_or_root(&folder.name).to_string();
            if !is_root(&name) {
                match self.store.create_folder(&name).await {
                    Ok(_) => report.folders_created += 1,
                    Err(e) => {
                        warn!(folder = %name, error = %e, "Failed to import folder");
                        report.failures.push(ImportFailure {
                            folder: name,
                            route: None,
                            message: e.message,
                        });
                        continue;
                    }
                }
            }

            for route in &folder.routes {
                let created = match route.to_create(&name).validate() {
                    Ok(valid) => self.store.create_route(valid).await,
                    Err(e) => Err(e),
                };
                match created {
                    Ok(_) => report.routes_created += 1,
                    Err(e) => {
                        warn!(folder = %name, error = %e, "Failed to import route");
                        report.failures.push(ImportFailure {
                            folder: name.clone(),
                            route: route.name.clone(),
                            message: e.message,
                        });
                    }
                }
            }
        }

        info!(
            folders = report.folders_created,
            routes = report.routes_created,
            failures = report.failures.len(),
            "Workspace imported"
        );
        Ok(report)
    }
}
