//! Documents derived from stored routes.

use std::sync::Arc;

use routehub_core::config::DocsConfig;
use routehub_core::error::AppError;
use routehub_core::result::AppResult;
use routehub_docs::{DocGenerator, OpenApiDocument, RenderFormat, render};
use routehub_entity::folder::folder_or_root;

use crate::store::RouteStore;

/// Generates OpenAPI documents on demand. Nothing is cached.
#[derive(Debug, Clone)]
pub struct DocService {
    store: Arc<RouteStore>,
    generator: DocGenerator,
}

impl DocService {
    /// Creates a new documentation service.
    pub fn new(store: Arc<RouteStore>, config: DocsConfig) -> Self {
        Self {
            store,
            generator: DocGenerator::new(config),
        }
    }

    /// Document for a single route.
    pub async fn route_document(&self, folder: &str, id: &str) -> AppResult<OpenApiDocument> {
        let route = self.store.get_route(folder, id).await?;
        Ok(self.generator.for_route(&route))
    }

    /// Document for every route of a folder. `NotFound` if the folder is
    /// absent or empty.
    pub async fn folder_document(&self, folder: &str) -> AppResult<OpenApiDocument> {
        let folder = folder_or_root(folder);
        let routes = self.store.list_routes(folder).await?;
        if routes.is_empty() {
            return Err(AppError::not_found(format!(
                "Folder '{folder}' is empty or does not exist"
            )));
        }
        self.generator.for_folder(folder, &routes)
    }

    /// Rendered document for a single route.
    pub async fn render_route(
        &self,
        folder: &str,
        id: &str,
        format: RenderFormat,
    ) -> AppResult<String> {
        render(&self.route_document(folder, id).await?, format)
    }

    /// Rendered document for a folder.
    pub async fn render_folder(&self, folder: &str, format: RenderFormat) -> AppResult<String> {
        render(&self.folder_document(folder).await?, format)
    }
}
