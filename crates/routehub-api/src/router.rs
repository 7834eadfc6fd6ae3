//! Route definitions for the RouteHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.
//!
//! `folder` and `folders` are reserved folder names: the static segments of
//! the folder endpoints win over the `{folder}` capture.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, the JSON fallback, the body limit
/// and request logging.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(saved_route_routes())
        .merge(docs_routes())
        .merge(workspace_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::fallback)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Folder listing and management
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/saved-routes/folders", get(handlers::folder::list_names))
        .route("/saved-routes/folder", post(handlers::folder::create_folder))
        .route(
            "/saved-routes/folder/{name}",
            put(handlers::folder::rename_folder).delete(handlers::folder::delete_folder),
        )
}

/// Saved route CRUD
fn saved_route_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/saved-routes",
            get(handlers::folder::list_folders).post(handlers::route::create_route),
        )
        .route(
            "/saved-routes/{folder}/{id}",
            get(handlers::route::get_route)
                .put(handlers::route::update_route)
                .delete(handlers::route::delete_route),
        )
}

/// Generated OpenAPI documents and the Swagger UI page
fn docs_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/saved-routes/{folder}/{id}/openapi",
            get(handlers::docs::route_document),
        )
        .route("/swagger-spec/{folder}", get(handlers::docs::folder_document))
        .route("/swagger-ui/{folder}", get(handlers::docs::swagger_ui))
}

/// Workspace snapshot export and import
fn workspace_routes() -> Router<AppState> {
    Router::new()
        .route("/workspace/export", get(handlers::workspace::export))
        .route("/workspace/import", post(handlers::workspace::import))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
