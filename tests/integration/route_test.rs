//! Integration tests for saved route CRUD and moves.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_get_route() {
    let app = helpers::TestApp::new().await;
    app.create_folder("billing").await;

    let created = app
        .create_route("billing", "POST", "/api/invoices", Some(r#"{"amount": 10}"#))
        .await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["folder"], "billing");
    assert!(created["createdAt"].is_string());

    let response = app
        .request("GET", &format!("/api/saved-routes/billing/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, created);
}

#[tokio::test]
async fn test_create_route_validation() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/saved-routes",
            Some(json!({ "name": "x", "method": "GET", "folder": "" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let response = app
        .request(
            "POST",
            "/api/saved-routes",
            Some(json!({ "name": "x", "method": "GET", "url": "/x", "folder": "ghost" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .raw_request("POST", "/api/saved-routes", "{not json".to_string())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_route_fields() {
    let app = helpers::TestApp::new().await;
    let created = app
        .create_route("root", "POST", "/api/items", Some(r#"{"a": 1}"#))
        .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/saved-routes/root/{id}"),
            Some(json!({ "name": "Create item", "body": null })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Create item");
    assert_eq!(response.body["url"], "/api/items");
    assert!(response.body.get("body").is_none_or(|b| b.is_null()));
    assert!(response.body["updatedAt"].is_string());

    let response = app
        .request(
            "PUT",
            "/api/saved-routes/root/999",
            Some(json!({ "name": "x" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_move_route() {
    let app = helpers::TestApp::new().await;
    app.create_folder("billing").await;
    let created = app.create_route("root", "GET", "/api/invoices/:id", None).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/saved-routes/root/{id}"),
            Some(json!({ "newFolder": "ghost" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PUT",
            &format!("/api/saved-routes/root/{id}"),
            Some(json!({ "newFolder": "billing" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["folder"], "billing");
    assert_eq!(response.body["id"], id);

    let response = app
        .request("GET", &format!("/api/saved-routes/root/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", &format!("/api/saved-routes/billing/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["url"], "/api/invoices/:id");
}

#[tokio::test]
async fn test_delete_route() {
    let app = helpers::TestApp::new().await;
    let created = app.create_route("", "DELETE", "/api/items/:id", None).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .request("DELETE", &format!("/api/saved-routes/root/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["message"].is_string());

    let response = app
        .request("DELETE", &format!("/api/saved-routes/root/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
