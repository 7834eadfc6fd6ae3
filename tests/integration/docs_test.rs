//! Integration tests for generated OpenAPI documents and the Swagger UI page.

mod helpers;

use http::StatusCode;
use http::header::CONTENT_TYPE;

#[tokio::test]
async fn test_billing_folder_document() {
    let app = helpers::TestApp::new().await;
    app.create_folder("billing").await;
    app.create_route("billing", "GET", "/api/invoices/:id", None).await;
    app.create_route(
        "billing",
        "POST",
        "/api/invoices",
        Some(r#"{"customer": "acme", "amount": 12.5, "lines": [{"sku": "A1", "qty": 2}]}"#),
    )
    .await;

    let response = app.request("GET", "/api/swagger-spec/billing", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let doc = &response.body;
    assert_eq!(doc["openapi"], "3.0.0");
    assert_eq!(doc["info"]["title"], "API - billing");
    assert_eq!(doc["servers"][0]["url"], "http://localhost:3000");

    let get = &doc["paths"]["/api/invoices/:id"]["get"];
    assert_eq!(get["tags"][0], "billing");
    assert_eq!(get["parameters"][0]["name"], "id");
    assert_eq!(get["parameters"][0]["in"], "path");
    assert_eq!(get["parameters"][0]["required"], true);

    let schema = &doc["paths"]["/api/invoices"]["post"]["requestBody"]["content"]
        ["application/json"]["schema"];
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["customer"]["type"], "string");
    assert_eq!(schema["properties"]["amount"]["type"], "number");
    assert_eq!(schema["properties"]["lines"]["type"], "array");
    assert_eq!(
        schema["properties"]["lines"]["items"]["properties"]["qty"]["type"],
        "integer"
    );
}

#[tokio::test]
async fn test_route_document_and_yaml() {
    let app = helpers::TestApp::new().await;
    let created = app
        .create_route("root", "GET", "https://api.example.com/v1/items/:id", None)
        .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .request("GET", &format!("/api/saved-routes/root/{id}/openapi"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["servers"][0]["url"], "https://api.example.com");
    assert!(response.body["paths"]["/v1/items/:id"]["get"].is_object());

    let response = app
        .request(
            "GET",
            &format!("/api/saved-routes/root/{id}/openapi?format=yaml"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response.headers[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/yaml")
    );
    assert!(response.text.starts_with("openapi: \"3.0.0\"\n"));
    assert!(response.text.contains("  /v1/items/:id:\n"));

    let response = app
        .request(
            "GET",
            &format!("/api/saved-routes/root/{id}/openapi?format=xml"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_or_missing_folder_document() {
    let app = helpers::TestApp::new().await;
    app.create_folder("empty").await;

    let response = app.request("GET", "/api/swagger-spec/empty", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");

    let response = app.request("GET", "/api/swagger-spec/ghost", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/saved-routes/root/1/openapi", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_swagger_ui_page() {
    let app = helpers::TestApp::new().await;
    app.create_folder("billing").await;
    app.create_route("billing", "GET", "/api/invoices", None).await;

    let response = app.request("GET", "/api/swagger-ui/billing", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response.headers[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    assert!(response.text.contains("<title>Swagger UI - billing</title>"));
    assert!(response.text.contains("/api/swagger-spec/"));

    let response = app.request("GET", "/api/swagger-ui/ghost", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.text.contains("Folder not found or empty"));
}
