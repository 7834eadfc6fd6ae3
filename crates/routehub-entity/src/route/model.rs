//! Saved route entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use routehub_core::error::AppError;
use routehub_core::result::AppResult;

/// A saved HTTP request.
///
/// `folder` is denormalized: the store rewrites it from the record's
/// physical placement on every read and write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Store-generated identifier, unique across all folders.
    #[serde(default)]
    pub id: String,
    /// Display label.
    #[serde(default)]
    pub name: String,
    /// HTTP method (GET, POST, PUT, DELETE, PATCH).
    #[serde(default)]
    pub method: String,
    /// Absolute URL or server-relative path.
    #[serde(default)]
    pub url: String,
    /// Raw request body, usually JSON text.
    #[serde(default)]
    pub body: Option<String>,
    /// Opaque bearer token.
    #[serde(default)]
    pub bearer_token: Option<String>,
    /// Opaque basic auth value (encoded or `user:pass`).
    #[serde(default)]
    pub basic_auth: Option<String>,
    /// Name of the owning folder.
    #[serde(default)]
    pub folder: String,
    /// When the route was saved.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    /// When the route was last edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data required to save a new route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoute {
    /// Display label.
    #[serde(default)]
    pub name: Option<String>,
    /// HTTP method.
    #[serde(default)]
    pub method: Option<String>,
    /// Target URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Raw request body.
    #[serde(default)]
    pub body: Option<String>,
    /// Opaque bearer token.
    #[serde(default)]
    pub bearer_token: Option<String>,
    /// Opaque basic auth value.
    #[serde(default)]
    pub basic_auth: Option<String>,
    /// Target folder; an empty string means `root`.
    #[serde(default)]
    pub folder: Option<String>,
}

/// A [`CreateRoute`] whose required fields have been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRoute {
    /// Trimmed, non-empty name.
    pub name: String,
    /// Non-empty method.
    pub method: String,
    /// Non-empty URL.
    pub url: String,
    /// Body, `None` when absent or empty.
    pub body: Option<String>,
    /// Bearer token, `None` when absent or empty.
    pub bearer_token: Option<String>,
    /// Basic auth, `None` when absent or empty.
    pub basic_auth: Option<String>,
    /// Folder reference as supplied (may be empty).
    pub folder: String,
}

impl CreateRoute {
    /// Checks the required fields and normalizes empty optionals to `None`.
    pub fn validate(self) -> AppResult<ValidRoute> {
        let name = required(self.name, "name")?.trim().to_string();
        let method = required(self.method, "method")?;
        let url = required(self.url, "url")?;
        let folder = self.folder.ok_or_else(|| {
            AppError::validation("Field 'folder' is required (use \"\" or \"root\" for root)")
        })?;

        Ok(ValidRoute {
            name,
            method,
            url,
            body: non_empty(self.body),
            bearer_token: non_empty(self.bearer_token),
            basic_auth: non_empty(self.basic_auth),
            folder,
        })
    }
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::validation(format!(
            "Field '{field}' is required (name, method, url and folder must be provided)"
        ))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
