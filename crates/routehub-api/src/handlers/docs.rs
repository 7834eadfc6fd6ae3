//! Generated OpenAPI document and Swagger UI handlers.

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use routehub_docs::RenderFormat;
use routehub_entity::folder::folder_or_root;

use crate::dto::DocQuery;
use crate::error::ApiError;
use crate::state::AppState;

const SWAGGER_UI_TEMPLATE: &str = include_str!("swagger_ui.html");

/// GET /api/saved-routes/{folder}/{id}/openapi?format=json|yaml
pub async fn route_document(
    State(state): State<AppState>,
    Path((folder, id)): Path<(String, String)>,
    Query(query): Query<DocQuery>,
) -> Result<Response, ApiError> {
    let format = query.render_format()?;
    let text = state.doc_service.render_route(&folder, &id, format).await?;
    Ok(document_response(text, format))
}

/// GET /api/swagger-spec/{folder}?format=json|yaml
pub async fn folder_document(
    State(state): State<AppState>,
    Path(folder): Path<String>,
    Query(query): Query<DocQuery>,
) -> Result<Response, ApiError> {
    let format = query.render_format()?;
    let text = state.doc_service.render_folder(&folder, format).await?;
    Ok(document_response(text, format))
}

/// GET /api/swagger-ui/{folder}
///
/// Answers with an HTML page in every case, including the 404 for an absent
/// or empty folder.
pub async fn swagger_ui(State(state): State<AppState>, Path(folder): Path<String>) -> Response {
    let folder = folder_or_root(&folder).to_string();
    match state.route_service.list_routes(&folder).await {
        Ok(routes) if !routes.is_empty() => Html(swagger_page(&folder)).into_response(),
        Ok(_) => not_found_page(),
        Err(e) if e.is_not_found() => not_found_page(),
        Err(e) => {
            tracing::error!(folder = %folder, error = %e, "Failed to load folder for Swagger UI");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Server error</h1>".to_string()),
            )
                .into_response()
        }
    }
}

fn document_response(text: String, format: RenderFormat) -> Response {
    ([(header::CONTENT_TYPE, format.content_type())], text).into_response()
}

fn not_found_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html("<h1>Folder not found or empty</h1>".to_string()),
    )
        .into_response()
}

/// Fills the page template. The folder name lands in the title as escaped
/// HTML and in the script as a JSON string literal with `<` escaped.
fn swagger_page(folder: &str) -> String {
    let literal = serde_json::Value::String(folder.to_string())
        .to_string()
        .replace('<', "\\u003c");
    SWAGGER_UI_TEMPLATE
        .replace("{{TITLE}}", &escape_html(folder))
        .replace("{{FOLDER_JSON}}", &literal)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swagger_page_escapes_folder() {
        let page = swagger_page("a<b>\"c");
        assert!(page.contains("<title>Swagger UI - a&lt;b&gt;&quot;c</title>"));
        assert!(page.contains(r#"const folder = "a\u003cb>\"c";"#));
        assert!(page.contains("swagger-ui-dist@5.17.14"));
    }
}
