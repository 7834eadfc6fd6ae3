//! Saved route service.

pub mod service;

pub use service::{RouteService, SaveMode};
