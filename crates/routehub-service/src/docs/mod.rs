//! OpenAPI documentation service.

pub mod service;

pub use service::DocService;
