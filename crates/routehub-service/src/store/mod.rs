//! Durable folder and route store.
//!
//! Layout inside the storage provider:
//!
//! ```text
//! <id>.json            route in the root folder
//! <folder>/<id>.json   route in a named folder
//! ```
//!
//! A route's `id` and `folder` are always taken from its physical placement
//! when read back, so a record can never disagree with where it lives.

pub mod id;

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use routehub_core::error::AppError;
use routehub_core::result::AppResult;
use routehub_core::traits::StorageProvider;
use routehub_entity::folder::{
    Folder, ROOT_FOLDER, folder_or_root, is_root, validate_folder_name,
};
use routehub_entity::route::{Route, RoutePatch, ValidRoute};

pub use id::IdGenerator;

const RECORD_EXT: &str = ".json";

/// Folder and route persistence over a [`StorageProvider`].
///
/// Mutations are serialized by a store-wide lock. Reads do not take it.
#[derive(Debug)]
pub struct RouteStore {
    storage: Arc<dyn StorageProvider>,
    ids: IdGenerator,
    write_lock: Mutex<()>,
}

impl RouteStore {
    /// Create a store over the given provider.
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self {
            storage,
            ids: IdGenerator::new(),
            write_lock: Mutex::new(()),
        }
    }

    /// The underlying storage provider.
    pub fn storage(&self) -> &Arc<dyn StorageProvider> {
        &self.storage
    }

    // ── Folders ──────────────────────────────────────────────────

    /// Every folder holding at least one route, `root` first, then by name.
    pub async fn list_folders(&self) -> AppResult<Vec<Folder>> {
        Ok(self
            .all_folders()
            .await?
            .into_iter()
            .filter(|f| !f.routes.is_empty())
            .collect())
    }

    /// Every folder including empty ones, `root` first, then by name.
    pub async fn all_folders(&self) -> AppResult<Vec<Folder>> {
        let mut folders = Vec::new();
        for name in self.list_folder_names().await? {
            let routes = self.read_folder(&name).await?;
            folders.push(Folder::new(name, routes));
        }
        Ok(folders)
    }

    /// Names of every folder, `root` first, then by name.
    pub async fn list_folder_names(&self) -> AppResult<Vec<String>> {
        let mut names = vec![ROOT_FOLDER.to_string()];
        let mut dirs: Vec<String> = self
            .storage
            .list("")
            .await?
            .into_iter()
            .filter(|e| e.is_directory && !e.name.starts_with('.') && !is_root(&e.name))
            .map(|e| e.name)
            .collect();
        dirs.sort();
        names.extend(dirs);
        Ok(names)
    }

    /// Returns `true` if the folder exists. `root` always exists.
    pub async fn folder_exists(&self, name: &str) -> AppResult<bool> {
        let name = folder_or_root(name);
        if is_root(name) {
            return Ok(true);
        }
        if !is_segment(name) || name.starts_with('.') {
            return Ok(false);
        }
        self.storage.is_dir(name).await
    }

    /// Create an empty folder and return its normalized name.
    pub async fn create_folder(&self, name: &str) -> AppResult<String> {
        let _guard = self.write_lock.lock().await;

        let name = validate_folder_name(name)?;
        if self.folder_exists(&name).await? || self.storage.exists(&name).await? {
            return Err(AppError::conflict(format!("Folder '{name}' already exists")));
        }

        self.storage.create_dir(&name).await?;
        info!(folder = %name, "Folder created");
        Ok(name)
    }

    /// Rename a folder, rewriting the `folder` field of every route in it.
    pub async fn rename_folder(&self, old: &str, new: &str) -> AppResult<String> {
        let _guard = self.write_lock.lock().await;

        let old = folder_or_root(old);
        if is_root(old) || is_root(new.trim()) {
            return Err(AppError::forbidden("The root folder cannot be renamed"));
        }
        if !self.folder_exists(old).await? {
            return Err(AppError::not_found(format!("Folder '{old}' not found")));
        }
        let new = validate_folder_name(new)?;
        if new == old {
            return Ok(new);
        }
        if self.storage.exists(&new).await? {
            return Err(AppError::conflict(format!("Folder '{new}' already exists")));
        }

        self.storage.rename(old, &new).await?;
        let routes = self.read_folder(&new).await?;
        for route in &routes {
            self.write_route(route).await?;
        }

        info!(from = %old, to = %new, routes = routes.len(), "Folder renamed");
        Ok(new)
    }

    /// Delete a folder and every route in it.
    pub async fn delete_folder(&self, name: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let name = folder_or_root(name);
        if is_root(name) {
            return Err(AppError::forbidden("The root folder cannot be deleted"));
        }
        if !self.folder_exists(name).await? {
            return Err(AppError::not_found(format!("Folder '{name}' not found")));
        }

        self.storage.delete_dir(name).await?;
        info!(folder = %name, "Folder deleted with all its routes");
        Ok(())
    }

    /// Delete every named folder and every root route.
    pub async fn clear(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        for entry in self.storage.list("").await? {
            if entry.name.starts_with('.') {
                continue;
            }
            if entry.is_directory {
                self.storage.delete_dir(&entry.path).await?;
            } else if entry.name.ends_with(RECORD_EXT) {
                self.storage.delete(&entry.path).await?;
            }
        }
        info!("Route store cleared");
        Ok(())
    }

    // ── Routes ───────────────────────────────────────────────────

    /// Routes of one folder ordered by id. `NotFound` if the folder is absent.
    pub async fn list_routes(&self, folder: &str) -> AppResult<Vec<Route>> {
        let folder = folder_or_root(folder);
        if !self.folder_exists(folder).await? {
            return Err(AppError::not_found(format!("Folder '{folder}' not found")));
        }
        self.read_folder(folder).await
    }

    /// Fetch one route.
    pub async fn get_route(&self, folder: &str, id: &str) -> AppResult<Route> {
        let folder = folder_or_root(folder);
        self.read_route(folder, id).await
    }

    /// Persist a new route and return it with its assigned id.
    pub async fn create_route(&self, draft: ValidRoute) -> AppResult<Route> {
        let _guard = self.write_lock.lock().await;

        let folder = folder_or_root(&draft.folder).to_string();
        if !self.folder_exists(&folder).await? {
            return Err(AppError::not_found(format!("Folder '{folder}' not found")));
        }

        let id = self.fresh_id().await?;
        let route = Route {
            id,
            name: draft.name,
            method: draft.method,
            url: draft.url,
            body: draft.body,
            bearer_token: draft.bearer_token,
            basic_auth: draft.basic_auth,
            folder,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.write_route(&route).await?;

        info!(
            route_id = %route.id,
            folder = %route.folder,
            method = %route.method,
            "Route saved"
        );
        Ok(route)
    }

    /// Apply a patch to a route, moving it when the patch names another
    /// folder.
    ///
    /// A move writes the destination record before removing the source; if
    /// the source cannot be removed the destination record is removed again
    /// and the error is returned.
    pub async fn update_route(
        &self,
        folder: &str,
        id: &str,
        patch: &RoutePatch,
    ) -> AppResult<Route> {
        let _guard = self.write_lock.lock().await;

        let source = folder_or_root(folder).to_string();
        let mut route = self.read_route(&source, id).await?;
        patch.apply_to(&mut route)?;
        route.updated_at = Some(Utc::now());

        let destination = patch
            .new_folder
            .as_deref()
            .map(folder_or_root)
            .filter(|dest| *dest != source)
            .map(str::to_string);

        let Some(destination) = destination else {
            self.write_route(&route).await?;
            info!(route_id = %route.id, folder = %route.folder, "Route updated");
            return Ok(route);
        };

        if !self.folder_exists(&destination).await? {
            return Err(AppError::not_found(format!(
                "Destination folder '{destination}' not found"
            )));
        }

        route.folder = destination;
        self.write_route(&route).await?;

        if let Err(err) = self.storage.delete(&record_path(&source, id)).await {
            if let Err(rollback) = self.storage.delete(&record_path(&route.folder, id)).await {
                warn!(
                    route_id = %id,
                    folder = %route.folder,
                    error = %rollback,
                    "Failed to roll back destination record"
                );
            }
            return Err(err);
        }

        info!(route_id = %route.id, from = %source, to = %route.folder, "Route moved");
        Ok(route)
    }

    /// Delete one route.
    pub async fn delete_route(&self, folder: &str, id: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let folder = folder_or_root(folder);
        // Unreadable records can still be deleted.
        let valid = is_segment(id) && (is_root(folder) || is_segment(folder));
        if !valid || !self.storage.exists(&record_path(folder, id)).await? {
            return Err(AppError::not_found(format!(
                "Route '{id}' not found in folder '{folder}'"
            )));
        }
        self.storage.delete(&record_path(folder, id)).await?;

        info!(route_id = %id, folder = %folder, "Route deleted");
        Ok(())
    }

    // ── Internals ────────────────────────────────────────────────

    async fn read_route(&self, folder: &str, id: &str) -> AppResult<Route> {
        let not_found =
            || AppError::not_found(format!("Route '{id}' not found in folder '{folder}'"));
        if !is_segment(id) || !(is_root(folder) || is_segment(folder)) {
            return Err(not_found());
        }

        let bytes = self
            .storage
            .read_bytes(&record_path(folder, id))
            .await
            .map_err(|e| if e.is_not_found() { not_found() } else { e })?;
        let route: Route = serde_json::from_slice(&bytes)?;
        Ok(placed(route, folder, id))
    }

    /// Read every record of a folder, skipping unreadable ones.
    async fn read_folder(&self, folder: &str) -> AppResult<Vec<Route>> {
        let dir = if is_root(folder) { "" } else { folder };
        let mut routes = Vec::new();

        for entry in self.storage.list(dir).await? {
            if entry.is_directory {
                continue;
            }
            let Some(id) = entry.name.strip_suffix(RECORD_EXT) else {
                continue;
            };
            let bytes = self.storage.read_bytes(&entry.path).await?;
            match serde_json::from_slice::<Route>(&bytes) {
                Ok(route) => routes.push(placed(route, folder, id)),
                Err(e) => {
                    warn!(path = %entry.path, error = %e, "Skipping unreadable route record")
                }
            }
        }

        routes.sort_by(|a, b| id_order(&a.id).cmp(&id_order(&b.id)));
        Ok(routes)
    }

    async fn write_route(&self, route: &Route) -> AppResult<()> {
        let data = serde_json::to_vec_pretty(route)?;
        self.storage
            .write(&record_path(&route.folder, &route.id), Bytes::from(data))
            .await
    }

    /// An id not used by any record in any folder.
    async fn fresh_id(&self) -> AppResult<String> {
        let folders = self.list_folder_names().await?;
        loop {
            let id = self.ids.next_id();
            let mut taken = false;
            for folder in &folders {
                if self.storage.exists(&record_path(folder, &id)).await? {
                    taken = true;
                    break;
                }
            }
            if !taken {
                return Ok(id);
            }
        }
    }
}

/// Storage path of a route record.
fn record_path(folder: &str, id: &str) -> String {
    if is_root(folder) {
        format!("{id}{RECORD_EXT}")
    } else {
        format!("{folder}/{id}{RECORD_EXT}")
    }
}

/// Overwrite identity fields from the record's placement.
fn placed(mut route: Route, folder: &str, id: &str) -> Route {
    route.id = id.to_string();
    route.folder = folder.to_string();
    if route.name.trim().is_empty() {
        route.name = id.to_string();
    }
    route
}

/// Numeric ids sort by value; anything else after them, lexically.
fn id_order(id: &str) -> (usize, &str) {
    (id.len(), id)
}

fn is_segment(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
