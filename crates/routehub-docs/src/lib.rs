//! # routehub-docs
//!
//! Derives OpenAPI documents from saved routes. Documents are computed on
//! demand and never persisted.
//!
//! - [`schema`] infers schema fragments from JSON values.
//! - [`document`] holds the serializable document model.
//! - [`generator`] builds single-route and whole-folder documents.
//! - [`render`] turns a document into JSON or YAML-like text.

pub mod document;
pub mod generator;
pub mod render;
pub mod schema;

pub use document::OpenApiDocument;
pub use generator::DocGenerator;
pub use render::{RenderFormat, render};
pub use schema::{Schema, infer};
