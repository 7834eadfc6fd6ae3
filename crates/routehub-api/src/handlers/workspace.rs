//! Workspace snapshot handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::Utc;

use routehub_entity::workspace::{ImportReport, WorkspaceSnapshot};

use crate::dto::ExportQuery;
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// GET /api/workspace/export?download=true
pub async fn export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    let snapshot = state.workspace_service.export().await?;

    if query.download {
        let disposition = format!(
            "attachment; filename=\"routehub-workspace-{}.json\"",
            Utc::now().format("%Y-%m-%d")
        );
        return Ok(([(header::CONTENT_DISPOSITION, disposition)], Json(snapshot)).into_response());
    }
    Ok(Json(snapshot).into_response())
}

/// POST /api/workspace/import
///
/// Replaces the whole store. A snapshot that fails validation is rejected
/// before anything is touched.
pub async fn import(
    State(state): State<AppState>,
    ApiJson(snapshot): ApiJson<WorkspaceSnapshot>,
) -> Result<Json<ImportReport>, ApiError> {
    let report = state.workspace_service.import(snapshot).await?;
    Ok(Json(report))
}
