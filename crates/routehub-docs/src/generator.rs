//! OpenAPI document generation from saved routes.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use tracing::debug;
use url::Url;

use routehub_core::config::DocsConfig;
use routehub_core::error::AppError;
use routehub_core::result::AppResult;
use routehub_entity::folder::{ROOT_FOLDER, is_root};
use routehub_entity::route::Route;

use crate::document::{
    Info, OpenApiDocument, Operation, Parameter, RequestBody, Server, standard_responses,
};
use crate::schema::{Schema, infer, infer_properties};

/// Matches `:name` path parameter tokens.
static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(\w+)").expect("Invalid regex constant"));

/// Tag used for routes of the root folder.
const ROOT_TAG: &str = "API";

/// Description attached to every server entry.
const SERVER_DESCRIPTION: &str = "API server";

/// Builds OpenAPI documents from saved routes.
///
/// Generation is a pure function of the routes and the configuration: the
/// same input always yields the same document.
#[derive(Debug, Clone, Default)]
pub struct DocGenerator {
    config: DocsConfig,
}

/// Server base and path split out of a route URL.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Target {
    server: String,
    path: String,
}

impl DocGenerator {
    /// Create a generator with the given settings.
    pub fn new(config: DocsConfig) -> Self {
        Self { config }
    }

    /// Build a single-path document describing one route.
    pub fn for_route(&self, route: &Route) -> OpenApiDocument {
        let target = self.target(&route.url);
        let title = if route.name.is_empty() {
            "API Route".to_string()
        } else {
            route.name.clone()
        };

        let mut paths = IndexMap::new();
        let mut item = IndexMap::new();
        item.insert(
            route.method.to_lowercase(),
            operation(route, &target.path, tag_for(&route.folder), None),
        );
        paths.insert(target.path.clone(), item);

        OpenApiDocument {
            openapi: self.config.openapi_version.clone(),
            info: Info {
                description: format!(
                    "Swagger documentation for route {} {}",
                    route.method, target.path
                ),
                title,
                version: self.config.api_version.clone(),
            },
            servers: vec![server(target.server)],
            paths,
        }
    }

    /// Build one document covering every route of a folder.
    ///
    /// Routes sharing a path are merged under it by method. The server entry
    /// comes from the first route. Fails with `NotFound` when `routes` is
    /// empty.
    pub fn for_folder(&self, folder: &str, routes: &[Route]) -> AppResult<OpenApiDocument> {
        let first = routes.first().ok_or_else(|| {
            AppError::not_found(format!("Folder '{folder}' has no routes to document"))
        })?;
        let base = self.target(&first.url).server;

        let mut paths: IndexMap<String, IndexMap<String, Operation>> = IndexMap::new();
        for route in routes {
            let target = self.target(&route.url);
            let op = operation(route, &target.path, tag_for(folder), Some(&route.id));
            paths
                .entry(target.path)
                .or_default()
                .insert(route.method.to_lowercase(), op);
        }

        debug!(
            folder,
            routes = routes.len(),
            paths = paths.len(),
            "Generated folder document"
        );

        let (title, label) = if is_root(folder) {
            ("API Routes".to_string(), "Root")
        } else {
            (format!("API - {folder}"), folder)
        };

        Ok(OpenApiDocument {
            openapi: self.config.openapi_version.clone(),
            info: Info {
                title,
                description: format!("Complete Swagger documentation for folder {label}"),
                version: self.config.api_version.clone(),
            },
            servers: vec![server(base)],
            paths,
        })
    }

    /// Split a route URL into server base and path.
    ///
    /// Absolute `http`/`https` URLs contribute their own origin; anything
    /// else is a path on the configured default server.
    fn target(&self, raw: &str) -> Target {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            if let Ok(url) = Url::parse(raw) {
                if let Some(host) = url.host_str() {
                    let server = match url.port() {
                        Some(port) => format!("{}://{host}:{port}", url.scheme()),
                        None => format!("{}://{host}", url.scheme()),
                    };
                    return Target {
                        server,
                        path: url.path().to_string(),
                    };
                }
            }
        }

        let path = if raw.starts_with('/') {
            raw.to_string()
        } else {
            format!("/{raw}")
        };
        Target {
            server: self.config.default_server_url.clone(),
            path,
        }
    }
}

fn server(url: String) -> Server {
    Server {
        url,
        description: SERVER_DESCRIPTION.to_string(),
    }
}

fn tag_for(folder: &str) -> &str {
    if folder.is_empty() || folder == ROOT_FOLDER {
        ROOT_TAG
    } else {
        folder
    }
}

fn operation(route: &Route, path: &str, tag: &str, id_suffix: Option<&str>) -> Operation {
    let summary = if route.name.is_empty() {
        format!("{} {path}", route.method)
    } else {
        route.name.clone()
    };

    Operation {
        summary,
        description: format!("Route {} for {path}", route.method),
        operation_id: operation_id(&route.method, path, id_suffix),
        tags: vec![tag.to_string()],
        parameters: path_parameters(path),
        request_body: request_body(route.body.as_deref()),
        responses: standard_responses(),
    }
}

/// `{method}_{path}` with every non-alphanumeric path character replaced
/// by `_`, optionally suffixed with `_{id}`.
fn operation_id(method: &str, path: &str, id_suffix: Option<&str>) -> String {
    let sanitized: String = path
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    match id_suffix {
        Some(id) => format!("{}_{sanitized}_{id}", method.to_lowercase()),
        None => format!("{}_{sanitized}", method.to_lowercase()),
    }
}

/// Required string parameters for each distinct `:name` token, in order of
/// first appearance.
fn path_parameters(path: &str) -> Vec<Parameter> {
    let mut params: Vec<Parameter> = Vec::new();
    for cap in PATH_PARAM.captures_iter(path) {
        let name = &cap[1];
        if !params.iter().any(|p| p.name == name) {
            params.push(Parameter::path(name));
        }
    }
    params
}

fn request_body(body: Option<&str>) -> Option<RequestBody> {
    let raw = body.filter(|b| !b.trim().is_empty())?;
    let schema = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => {
            let properties = infer_properties(&map);
            Schema {
                properties: Some(properties),
                ..Schema::of_type("object").with_example(Value::Object(map))
            }
        }
        Ok(other) => infer(&other).with_example(other),
        Err(_) => Schema::string_example(raw),
    };
    Some(RequestBody::json(schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn route(id: &str, method: &str, url: &str, body: Option<&str>, folder: &str) -> Route {
        Route {
            id: id.into(),
            name: format!("{method} {id}"),
            method: method.into(),
            url: url.into(),
            body: body.map(str::to_string),
            bearer_token: None,
            basic_auth: None,
            folder: folder.into(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_path_parameter_extraction() {
        let doc =
            DocGenerator::default().for_route(&route("1", "GET", "/api/items/:id", None, "root"));
        let op = &doc.paths["/api/items/:id"]["get"];
        assert_eq!(op.parameters.len(), 1);
        let value = serde_json::to_value(&op.parameters[0]).unwrap();
        assert_eq!(value["name"], "id");
        assert_eq!(value["in"], "path");
        assert_eq!(value["required"], true);
        assert_eq!(op.tags, vec!["API"]);
        assert_eq!(op.operation_id, "get__api_items__id");
        assert!(op.request_body.is_none());
    }

    #[test]
    fn test_repeated_params_are_deduplicated() {
        let params = path_parameters("/a/:id/b/:other/c/:id");
        let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["id", "other"]);
    }

    #[test]
    fn test_absolute_url_sets_server() {
        let doc = DocGenerator::default().for_route(&route(
            "1",
            "POST",
            "https://api.example.com:8443/v1/orders?x=1",
            Some(r#"{"qty": 2}"#),
            "shop",
        ));
        assert_eq!(doc.servers[0].url, "https://api.example.com:8443");
        let op = &doc.paths["/v1/orders"]["post"];
        assert_eq!(op.tags, vec!["shop"]);

        let body = op.request_body.as_ref().unwrap();
        let schema = serde_json::to_value(body.json_schema()).unwrap();
        assert_eq!(
            schema,
            json!({
                "type": "object",
                "example": {"qty": 2},
                "properties": {"qty": {"type": "integer", "example": 2}}
            })
        );
    }

    #[test]
    fn test_relative_url_uses_default_server() {
        let generator = DocGenerator::new(DocsConfig {
            default_server_url: "http://localhost:9999".into(),
            ..Default::default()
        });
        let doc = generator.for_route(&route("1", "GET", "health", None, "root"));
        assert_eq!(doc.servers[0].url, "http://localhost:9999");
        assert!(doc.paths.contains_key("/health"));
        assert_eq!(doc.openapi, "3.0.0");
    }

    #[test]
    fn test_unparsable_body_becomes_string_schema() {
        let body = request_body(Some("not json")).unwrap();
        let schema = body.json_schema().unwrap();
        assert_eq!(schema.schema_type.as_deref(), Some("string"));
        assert_eq!(schema.example, Some(json!("not json")));

        let array = request_body(Some("[1,2]")).unwrap();
        let schema = array.json_schema().unwrap();
        assert_eq!(schema.schema_type.as_deref(), Some("array"));
        assert_eq!(schema.example, Some(json!([1, 2])));

        assert!(request_body(Some("")).is_none());
    }

    #[test]
    fn test_folder_merges_paths() {
        let routes = vec![
            route("10", "GET", "http://svc.local/api/invoices/:id", None, "billing"),
            route("11", "DELETE", "/api/invoices/:id", None, "billing"),
            route("12", "POST", "/api/invoices", Some("{}"), "billing"),
        ];
        let doc = DocGenerator::default().for_folder("billing", &routes).unwrap();

        assert_eq!(doc.info.title, "API - billing");
        assert_eq!(doc.servers[0].url, "http://svc.local");
        assert_eq!(doc.paths.len(), 2);
        let item = &doc.paths["/api/invoices/:id"];
        assert_eq!(item.keys().collect::<Vec<_>>(), vec!["get", "delete"]);
        assert_eq!(item["delete"].operation_id, "delete__api_invoices__id_11");
    }

    #[test]
    fn test_empty_folder_is_not_found() {
        let err = DocGenerator::default().for_folder("billing", &[]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let routes = vec![
            route("1", "PUT", "/a/:x", Some(r#"{"b":[{"c":1.5}],"a":null}"#), "root"),
            route("2", "GET", "/b", None, "root"),
        ];
        let generator = DocGenerator::default();
        let first = serde_json::to_string(&generator.for_folder("root", &routes).unwrap()).unwrap();
        let second = serde_json::to_string(&generator.for_folder("root", &routes).unwrap()).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("\"title\":\"API Routes\""));
    }
}
