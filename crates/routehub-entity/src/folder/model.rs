//! Folder entity model.

use serde::{Deserialize, Serialize};

use routehub_core::error::AppError;
use routehub_core::result::AppResult;

use crate::route::Route;

/// Name of the implicit folder holding unfoldered routes.
pub const ROOT_FOLDER: &str = "root";

/// Names that collide with static API path segments.
const RESERVED_NAMES: &[&str] = &["folder", "folders"];

/// A folder together with the routes it currently contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder name (`root` for the default collection).
    pub name: String,
    /// Label shown in listings.
    pub display_name: String,
    /// Routes stored in this folder.
    pub routes: Vec<Route>,
}

impl Folder {
    /// Builds a folder listing entry.
    pub fn new(name: impl Into<String>, routes: Vec<Route>) -> Self {
        let name = name.into();
        Self {
            display_name: display_name(&name),
            name,
            routes,
        }
    }
}

/// Returns `true` for the reserved root folder name.
pub fn is_root(name: &str) -> bool {
    name == ROOT_FOLDER
}

/// Maps an empty folder reference to `root`.
pub fn folder_or_root(name: &str) -> &str {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        ROOT_FOLDER
    } else {
        trimmed
    }
}

/// Human-readable label for a folder.
pub fn display_name(name: &str) -> String {
    if is_root(name) {
        "📁 Root".to_string()
    } else {
        format!("📁 {name}")
    }
}

/// Validates a user-supplied folder name and returns it trimmed.
///
/// A folder name must be a single, non-empty path segment that does not
/// start with `.`.
pub fn validate_folder_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Folder name is required"));
    }
    if trimmed.contains(['/', '\\']) || trimmed == ".." {
        return Err(AppError::validation(format!(
            "Invalid folder name '{trimmed}': must be a single path segment"
        )));
    }
    if trimmed.starts_with('.') {
        return Err(AppError::validation(format!(
            "Invalid folder name '{trimmed}': must not start with '.'"
        )));
    }
    if RESERVED_NAMES.contains(&trimmed) {
        return Err(AppError::validation(format!(
            "Folder name '{trimmed}' is reserved"
        )));
    }
    Ok(trimmed.to_string())
}
