//! Whole-store snapshots used for export and import.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use routehub_core::error::AppError;
use routehub_core::result::AppResult;

use crate::folder::{Folder, display_name, is_root, validate_folder_name};
use crate::route::{CreateRoute, Route};

/// Snapshot format version written by exports.
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// A serialized copy of every folder and route in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    /// Snapshot format version.
    #[serde(default = "default_version")]
    pub version: String,
    /// When the snapshot was taken.
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
    /// Folders in store order, `root` first.
    pub folders: Vec<WorkspaceFolder>,
}

/// A folder entry inside a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceFolder {
    /// Folder name.
    pub name: String,
    /// Listing label (informational only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Routes of the folder.
    #[serde(default)]
    pub routes: Vec<WorkspaceRoute>,
}

/// A route entry inside a snapshot.
///
/// Fields are optional on the way in so that hand-edited or older
/// snapshots can be validated with precise messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRoute {
    /// Identifier in the exporting store (not reused on import).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
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
}

impl WorkspaceSnapshot {
    /// Builds a snapshot from folder listings.
    pub fn from_folders(folders: Vec<Folder>, export_date: DateTime<Utc>) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            export_date: Some(export_date),
            folders: folders.into_iter().map(WorkspaceFolder::from).collect(),
        }
    }

    /// Total number of routes in the snapshot.
    pub fn route_count(&self) -> usize {
        self.folders.iter().map(|f| f.routes.len()).sum()
    }

    /// Checks every folder name and route before an import touches the store.
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = std::collections::HashSet::new();
        for folder in &self.folders {
            if !is_root(&folder.name) {
                validate_folder_name(&folder.name)?;
            }
            if !seen.insert(folder.name.trim()) {
                return Err(AppError::validation(format!(
                    "Folder '{}' appears more than once in the snapshot",
                    folder.name
                )));
            }
            for (index, route) in folder.routes.iter().enumerate() {
                route.to_create(&folder.name).validate().map_err(|e| {
                    AppError::validation(format!(
                        "Route #{} of folder '{}': {}",
                        index + 1,
                        folder.name,
                        e.message
                    ))
                })?;
            }
        }
        Ok(())
    }
}

impl WorkspaceRoute {
    /// Converts the entry into a save request targeting `folder`.
    pub fn to_create(&self, folder: &str) -> CreateRoute {
        CreateRoute {
            name: self.name.clone(),
            method: self.method.clone(),
            url: self.url.clone(),
            body: self.body.clone(),
            bearer_token: self.bearer_token.clone(),
            basic_auth: self.basic_auth.clone(),
            folder: Some(folder.to_string()),
        }
    }
}

impl From<Folder> for WorkspaceFolder {
    fn from(folder: Folder) -> Self {
        Self {
            display_name: Some(display_name(&folder.name)),
            name: folder.name,
            routes: folder.routes.into_iter().map(WorkspaceRoute::from).collect(),
        }
    }
}

impl From<Route> for WorkspaceRoute {
    fn from(route: Route) -> Self {
        Self {
            id: Some(route.id),
            name: Some(route.name),
            method: Some(route.method),
            url: Some(route.url),
            body: route.body,
            bearer_token: route.bearer_token,
            basic_auth: route.basic_auth,
        }
    }
}

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Number of folders created.
    pub folders_created: usize,
    /// Number of routes created.
    pub routes_created: usize,
    /// Items that could not be recreated.
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    /// Returns `true` if every item was recreated.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A single item that failed to import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFailure {
    /// Folder being imported.
    pub folder: String,
    /// Route name, when the failure concerns a route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Error message.
    pub message: String,
}

fn default_version() -> String {
    SNAPSHOT_VERSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use routehub_core::error::ErrorKind;

    fn snapshot(json: serde_json::Value) -> WorkspaceSnapshot {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_accepts_minimal_snapshot() {
        let snap = snapshot(serde_json::json!({
            "folders": [
                { "name": "root", "routes": [
                    { "name": "Ping", "method": "GET", "url": "/ping" }
                ]},
                { "name": "billing" }
            ]
        }));
        assert_eq!(snap.version, SNAPSHOT_VERSION);
        assert_eq!(snap.route_count(), 1);
        snap.validate().unwrap();
    }

    #[test]
    fn test_rejects_route_without_url() {
        let snap = snapshot(serde_json::json!({
            "folders": [{ "name": "billing", "routes": [{ "name": "x", "method": "GET" }] }]
        }));
        let err = snap.validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("billing"));
    }

    #[test]
    fn test_rejects_duplicate_folders() {
        let snap = snapshot(serde_json::json!({
            "folders": [{ "name": "a" }, { "name": "a" }]
        }));
        assert!(snap.validate().is_err());
    }
}
