//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_snapshot_path() -> String {
    "lexdesk.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Snapshot file read when `--data` is not given.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}
