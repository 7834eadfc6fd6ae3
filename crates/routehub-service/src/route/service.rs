//! Route CRUD and the save flow.

use std::sync::Arc;

use tracing::debug;

use routehub_core::result::AppResult;
use routehub_entity::route::{CreateRoute, Route, RoutePatch};

use crate::store::RouteStore;

/// What a save should do with a route draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveMode {
    /// Save a new route into `folder`.
    Create {
        /// Target folder (`""` or `root` for root).
        folder: String,
    },
    /// Overwrite the route `id` currently stored in `folder`. When the
    /// draft names another folder the route is moved there.
    Edit {
        /// Folder currently holding the route.
        folder: String,
        /// Route id.
        id: String,
    },
}

impl SaveMode {
    /// Returns `true` for [`SaveMode::Edit`].
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }
}

/// Manages saved routes.
#[derive(Debug, Clone)]
pub struct RouteService {
    store: Arc<RouteStore>,
}

impl RouteService {
    /// Creates a new route service.
    pub fn new(store: Arc<RouteStore>) -> Self {
        Self { store }
    }

    /// Validates and stores a new route.
    pub async fn create_route(&self, req: CreateRoute) -> AppResult<Route> {
        let valid = req.validate()?;
        self.store.create_route(valid).await
    }

    /// Gets a route.
    pub async fn get_route(&self, folder: &str, id: &str) -> AppResult<Route> {
        self.store.get_route(folder, id).await
    }

    /// Lists the routes of a folder.
    pub async fn list_routes(&self, folder: &str) -> AppResult<Vec<Route>> {
        self.store.list_routes(folder).await
    }

    /// Applies a partial update, moving the route if requested.
    pub async fn update_route(
        &self,
        folder: &str,
        id: &str,
        patch: RoutePatch,
    ) -> AppResult<Route> {
        self.store.update_route(folder, id, &patch).await
    }

    /// Deletes a route.
    pub async fn delete_route(&self, folder: &str, id: &str) -> AppResult<()> {
        self.store.delete_route(folder, id).await
    }

    /// Saves a complete draft according to `mode`.
    ///
    /// In edit mode every field of the draft replaces the stored one,
    /// including clearing optional fields the draft leaves empty. The
    /// draft's `folder`, when given, is the destination folder.
    pub async fn save(&self, mode: SaveMode, mut draft: CreateRoute) -> AppResult<Route> {
        debug!(edit = mode.is_edit(), "Saving route draft");
        match mode {
            SaveMode::Create { folder } => {
                draft.folder = Some(folder);
                self.create_route(draft).await
            }
            SaveMode::Edit { folder, id } => {
                let target = draft.folder.take().unwrap_or_else(|| folder.clone());
                draft.folder = Some(target);
                let valid = draft.validate()?;

                let patch = RoutePatch {
                    name: Some(valid.name),
                    method: Some(valid.method),
                    url: Some(valid.url),
                    body: Some(valid.body),
                    bearer_token: Some(valid.bearer_token),
                    basic_auth: Some(valid.basic_auth),
                    new_folder: Some(valid.folder),
                };
                self.store.update_route(&folder, &id, &patch).await
            }
        }
    }
}
