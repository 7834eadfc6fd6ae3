//! Folder CRUD operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use routehub_core::error::AppError;
use routehub_entity::folder::{Folder, folder_or_root};

use crate::store::RouteStore;

/// Manages folders of saved routes.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Route store.
    store: Arc<RouteStore>,
}

/// Request to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[serde(default)]
    pub name: String,
}

/// Request to rename a folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameFolderRequest {
    /// New folder name.
    #[serde(default)]
    pub name: String,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(store: Arc<RouteStore>) -> Self {
        Self { store }
    }

    /// Lists every non-empty folder with its routes.
    pub async fn list_folders(&self) -> Result<Vec<Folder>, AppError> {
        self.store.list_folders().await
    }

    /// Lists every folder name, `root` first.
    pub async fn list_names(&self) -> Result<Vec<String>, AppError> {
        self.store.list_folder_names().await
    }

    /// Gets a folder with its routes, including when it is empty.
    pub async fn get_folder(&self, name: &str) -> Result<Folder, AppError> {
        let routes = self.store.list_routes(name).await?;
        Ok(Folder::new(folder_or_root(name), routes))
    }

    /// Creates a new folder.
    pub async fn create_folder(&self, req: CreateFolderRequest) -> Result<String, AppError> {
        self.store.create_folder(&req.name).await
    }

    /// Renames a folder.
    pub async fn rename_folder(
        &self,
        name: &str,
        req: RenameFolderRequest,
    ) -> Result<String, AppError> {
        self.store.rename_folder(name, &req.name).await
    }

    /// Deletes a folder and all of its routes.
    pub async fn delete_folder(&self, name: &str) -> Result<(), AppError> {
        self.store.delete_folder(name).await
    }
}
