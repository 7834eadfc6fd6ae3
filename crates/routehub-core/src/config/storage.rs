//! Saved-route storage configuration.

use serde::{Deserialize, Serialize};

/// Storage configuration for the route store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base directory of the saved-route namespace. Routes of the `root`
    /// folder live directly here; every subdirectory is a user folder.
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            routes_dir: default_routes_dir(),
        }
    }
}

fn default_routes_dir() -> String {
    "./data/saved_routes".to_string()
}
