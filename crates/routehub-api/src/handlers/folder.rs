//! Folder listing and management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use routehub_entity::folder::Folder;
use routehub_service::{CreateFolderRequest, RenameFolderRequest};

use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// GET /api/saved-routes
pub async fn list_folders(State(state): State<AppState>) -> Result<Json<Vec<Folder>>, ApiError> {
    let folders = state.folder_service.list_folders().await?;
    Ok(Json(folders))
}

/// GET /api/saved-routes/folders
pub async fn list_names(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let names = state.folder_service.list_names().await?;
    Ok(Json(names))
}

/// POST /api/saved-routes/folder
pub async fn create_folder(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateFolderRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let name = state.folder_service.create_folder(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_name(
            format!("Folder '{name}' created"),
            name,
        )),
    ))
}

/// PUT /api/saved-routes/folder/{name}
pub async fn rename_folder(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(req): ApiJson<RenameFolderRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let renamed = state.folder_service.rename_folder(&name, req).await?;
    Ok(Json(MessageResponse::with_name(
        format!("Folder '{name}' renamed to '{renamed}'"),
        renamed,
    )))
}

/// DELETE /api/saved-routes/folder/{name}
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.folder_service.delete_folder(&name).await?;
    Ok(Json(MessageResponse::new(format!(
        "Folder '{name}' and all its routes deleted"
    ))))
}
