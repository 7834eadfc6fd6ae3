//! OpenAPI generation settings.

use serde::{Deserialize, Serialize};

/// Settings applied to every generated OpenAPI document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Server URL used when a route's URL is not absolute.
    #[serde(default = "default_server_url")]
    pub default_server_url: String,
    /// Value of the top-level `openapi` field.
    #[serde(default = "default_openapi_version")]
    pub openapi_version: String,
    /// Value of `info.version`.
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            default_server_url: default_server_url(),
            openapi_version: default_openapi_version(),
            api_version: default_api_version(),
        }
    }
}

fn default_server_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_openapi_version() -> String {
    "3.0.0".to_string()
}

fn default_api_version() -> String {
    "1.0.0".to_string()
}
