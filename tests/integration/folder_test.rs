//! Integration tests for folder listing and management.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_folder_and_conflicts() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/saved-routes/folder",
            Some(json!({ "name": "billing" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "billing");
    assert!(response.body["message"].is_string());

    let response = app
        .request(
            "POST",
            "/api/saved-routes/folder",
            Some(json!({ "name": "billing" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "CONFLICT");

    let response = app
        .request("POST", "/api/saved-routes/folder", Some(json!({ "name": "  " })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let response = app
        .request("POST", "/api/saved-routes/folder", Some(json!({})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/saved-routes/folder",
            Some(json!({ "name": ".drafts" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_folder_names_root_first() {
    let app = helpers::TestApp::new().await;
    app.create_folder("zeta").await;
    app.create_folder("alpha").await;

    let response = app.request("GET", "/api/saved-routes/folders", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!(["root", "alpha", "zeta"]));
}

#[tokio::test]
async fn test_listing_skips_empty_folders() {
    let app = helpers::TestApp::new().await;
    app.create_folder("empty").await;
    app.create_folder("billing").await;
    app.create_route("billing", "GET", "/api/invoices", None).await;
    app.create_route("", "GET", "/health", None).await;

    let response = app.request("GET", "/api/saved-routes", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let folders = response.body.as_array().unwrap();
    assert_eq!(folders.len(), 2);
    assert_eq!(folders[0]["name"], "root");
    assert!(folders[0]["displayName"].is_string());
    assert_eq!(folders[1]["name"], "billing");
    assert_eq!(folders[1]["routes"][0]["folder"], "billing");
}

#[tokio::test]
async fn test_rename_folder() {
    let app = helpers::TestApp::new().await;
    app.create_folder("old").await;
    app.create_folder("taken").await;
    let route = app.create_route("old", "GET", "/a", None).await;
    let id = route["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            "/api/saved-routes/folder/root",
            Some(json!({ "name": "x" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "FORBIDDEN");

    let response = app
        .request(
            "PUT",
            "/api/saved-routes/folder/ghost",
            Some(json!({ "name": "x" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PUT",
            "/api/saved-routes/folder/old",
            Some(json!({ "name": "taken" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "CONFLICT");

    let response = app
        .request(
            "PUT",
            "/api/saved-routes/folder/old",
            Some(json!({ "name": "new" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "new");

    let response = app
        .request("GET", &format!("/api/saved-routes/new/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["folder"], "new");
}

#[tokio::test]
async fn test_delete_folder_cascades() {
    let app = helpers::TestApp::new().await;
    app.create_folder("billing").await;
    let route = app.create_route("billing", "GET", "/a", None).await;
    let id = route["id"].as_str().unwrap();

    let response = app
        .request("DELETE", "/api/saved-routes/folder/root", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "FORBIDDEN");

    let response = app
        .request("DELETE", "/api/saved-routes/folder/ghost", None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");

    let response = app
        .request("DELETE", "/api/saved-routes/folder/billing", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/saved-routes/billing/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/saved-routes/folders", None).await;
    assert_eq!(response.body, json!(["root"]));
}

#[tokio::test]
async fn test_unknown_path_and_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/nope", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
