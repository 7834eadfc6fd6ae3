//! Integration tests for workspace export and import.

mod helpers;

use http::StatusCode;
use http::header::CONTENT_DISPOSITION;
use serde_json::json;

#[tokio::test]
async fn test_export_import_round_trip() {
    let source = helpers::TestApp::new().await;
    source.create_folder("billing").await;
    source.create_folder("empty").await;
    source
        .create_route("billing", "POST", "/api/invoices", Some(r#"{"a": 1}"#))
        .await;
    source.create_route("root", "GET", "/health", None).await;

    let export = source.request("GET", "/api/workspace/export", None).await;
    assert_eq!(export.status, StatusCode::OK);
    let snapshot = export.body;
    assert_eq!(snapshot["version"], "1.0.0");
    assert!(snapshot["exportDate"].is_string());
    let names: Vec<_> = snapshot["folders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["root", "billing", "empty"]);

    let target = helpers::TestApp::new().await;
    target.create_folder("stale").await;
    target.create_route("stale", "GET", "/old", None).await;

    let import = target
        .request("POST", "/api/workspace/import", Some(snapshot))
        .await;
    assert_eq!(import.status, StatusCode::OK, "{:?}", import.body);
    assert_eq!(import.body["routesCreated"], 2);
    assert_eq!(import.body["failures"], json!([]));

    let folders = target.request("GET", "/api/saved-routes/folders", None).await;
    assert_eq!(folders.body, json!(["root", "billing", "empty"]));

    let listing = target.request("GET", "/api/saved-routes", None).await;
    let billing = &listing.body[1];
    assert_eq!(billing["name"], "billing");
    assert_eq!(billing["routes"][0]["url"], "/api/invoices");
    assert_eq!(billing["routes"][0]["body"], r#"{"a": 1}"#);
}

#[tokio::test]
async fn test_invalid_snapshot_leaves_store_untouched() {
    let app = helpers::TestApp::new().await;
    app.create_folder("keep").await;
    app.create_route("keep", "GET", "/keep", None).await;

    let snapshot = json!({
        "version": "1.0.0",
        "folders": [
            { "name": "fine", "routes": [{ "name": "ok", "method": "GET", "url": "/ok" }] },
            { "name": "broken", "routes": [{ "name": "no url", "method": "GET" }] }
        ]
    });
    let response = app
        .request("POST", "/api/workspace/import", Some(snapshot))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let response = app
        .request("POST", "/api/workspace/import", Some(json!({ "version": "1.0.0" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let folders = app.request("GET", "/api/saved-routes/folders", None).await;
    assert_eq!(folders.body, json!(["root", "keep"]));
}

#[tokio::test]
async fn test_export_download_header() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/workspace/export?download=true", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let disposition = response.headers[CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"routehub-workspace-"));
}
