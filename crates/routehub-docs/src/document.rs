//! OpenAPI document model.
//!
//! Maps are [`IndexMap`]s so serialization follows insertion order and
//! generated output is stable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// Media type used for every request and response body.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// A complete OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version string.
    pub openapi: String,
    /// Document metadata.
    pub info: Info,
    /// Base URLs.
    pub servers: Vec<Server>,
    /// Path → lowercase method → operation.
    pub paths: IndexMap<String, PathItem>,
}

/// Operations of a single path, keyed by lowercase HTTP method.
pub type PathItem = IndexMap<String, Operation>;

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
}

/// A server entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
    pub description: String,
}

/// One HTTP operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub summary: String,
    pub description: String,
    pub operation_id: String,
    pub tags: Vec<String>,
    pub parameters: Vec<Parameter>,
    /// Absent when the route has no body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Status code → response.
    pub responses: IndexMap<String, Response>,
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
}

/// An operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    pub required: bool,
    pub schema: Schema,
    pub description: String,
}

impl Parameter {
    /// A required string path parameter.
    pub fn path(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: format!("Parameter {name}"),
            name,
            location: ParameterLocation::Path,
            required: true,
            schema: Schema::of_type("string"),
        }
    }
}

/// A request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub required: bool,
    /// Media type → payload description.
    pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
    /// A required JSON body described by `schema`.
    pub fn json(schema: Schema) -> Self {
        Self {
            required: true,
            content: json_content(schema),
        }
    }

    /// Schema of the JSON payload, if any.
    pub fn json_schema(&self) -> Option<&Schema> {
        self.content.get(JSON_MEDIA_TYPE).map(|m| &m.schema)
    }
}

/// Payload description for one media type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    pub schema: Schema,
}

/// An operation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

impl Response {
    /// A response with only a description.
    pub fn described(description: &str) -> Self {
        Self {
            description: description.to_string(),
            content: None,
        }
    }
}

/// The canned response set attached to every generated operation.
pub fn standard_responses() -> IndexMap<String, Response> {
    let mut responses = IndexMap::new();
    responses.insert(
        "200".to_string(),
        Response {
            description: "Successful response".to_string(),
            content: Some(json_content(Schema::of_type("object"))),
        },
    );
    responses.insert("400".to_string(), Response::described("Invalid request"));
    responses.insert("404".to_string(), Response::described("Resource not found"));
    responses.insert("500".to_string(), Response::described("Server error"));
    responses
}

fn json_content(schema: Schema) -> IndexMap<String, MediaType> {
    let mut content = IndexMap::new();
    content.insert(JSON_MEDIA_TYPE.to_string(), MediaType { schema });
    content
}
