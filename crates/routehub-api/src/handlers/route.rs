//! Saved route handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use routehub_entity::route::{CreateRoute, Route, RoutePatch};

use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /api/saved-routes
pub async fn create_route(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateRoute>,
) -> Result<(StatusCode, Json<Route>), ApiError> {
    let route = state.route_service.create_route(req).await?;
    Ok((StatusCode::CREATED, Json(route)))
}

/// GET /api/saved-routes/{folder}/{id}
pub async fn get_route(
    State(state): State<AppState>,
    Path((folder, id)): Path<(String, String)>,
) -> Result<Json<Route>, ApiError> {
    let route = state.route_service.get_route(&folder, &id).await?;
    Ok(Json(route))
}

/// PUT /api/saved-routes/{folder}/{id}
///
/// `newFolder` in the body moves the route.
pub async fn update_route(
    State(state): State<AppState>,
    Path((folder, id)): Path<(String, String)>,
    ApiJson(patch): ApiJson<RoutePatch>,
) -> Result<Json<Route>, ApiError> {
    let route = state.route_service.update_route(&folder, &id, patch).await?;
    Ok(Json(route))
}

/// DELETE /api/saved-routes/{folder}/{id}
pub async fn delete_route(
    State(state): State<AppState>,
    Path((folder, id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.route_service.delete_route(&folder, &id).await?;
    Ok(Json(MessageResponse::new(format!("Route '{id}' deleted"))))
}
