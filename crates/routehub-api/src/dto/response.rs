//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Confirmation body of folder and route mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
    /// Resulting folder name, for folder create and rename.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl MessageResponse {
    /// A message without a name.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            name: None,
        }
    }

    /// A message carrying the resulting folder name.
    pub fn with_name(message: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            name: Some(name.into()),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the server answers.
    pub status: String,
    /// Server version.
    pub version: String,
}
