//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use routehub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Holds the temporary routes directory alive for the test
    _routes_dir: TempDir,
}

impl TestApp {
    /// Create a new test application over an empty temporary store
    pub async fn new() -> Self {
        let routes_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.storage.routes_dir = routes_dir.path().to_string_lossy().into_owned();
        config.docs.default_server_url = "http://localhost:3000".to_string();

        let state = routehub_api::build_state(config.clone())
            .await
            .expect("Failed to build state");
        let router = routehub_api::build_app(state);

        Self {
            router,
            config,
            _routes_dir: routes_dir,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str).await
    }

    /// Make an HTTP request with a raw body
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }

    /// Create a folder and assert success
    pub async fn create_folder(&self, name: &str) {
        let response = self
            .request(
                "POST",
                "/api/saved-routes/folder",
                Some(serde_json::json!({ "name": name })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Folder create failed: {:?}",
            response.body
        );
    }

    /// Save a route and return its JSON
    pub async fn create_route(
        &self,
        folder: &str,
        method: &str,
        url: &str,
        body: Option<&str>,
    ) -> Value {
        let mut payload = serde_json::json!({
            "name": format!("{method} {url}"),
            "method": method,
            "url": url,
            "folder": folder,
        });
        if let Some(body) = body {
            payload["body"] = Value::String(body.to_string());
        }

        let response = self
            .request("POST", "/api/saved-routes", Some(payload))
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Route create failed: {:?}",
            response.body
        );
        response.body
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestResponse {
    /// The `error` code of an error body
    pub fn error_code(&self) -> &str {
        self.body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }
}
