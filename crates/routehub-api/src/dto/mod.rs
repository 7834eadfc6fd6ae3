//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::{DocQuery, ExportQuery};
pub use response::{HealthResponse, MessageResponse};
