//! Route handlers organized by domain.

pub mod docs;
pub mod folder;
pub mod health;
pub mod route;
pub mod workspace;

use axum::http::Uri;

use routehub_core::error::AppError;

use crate::error::ApiError;

/// Any path outside the API answers with a JSON 404.
pub async fn fallback(uri: Uri) -> ApiError {
    AppError::not_found(format!("No route for {}", uri.path())).into()
}
