//! Snapshot of practice data, the unit LexDesk reads.
//!
//! A snapshot is produced by whatever fetches records (API, mock, export) and
//! is read-only from LexDesk's point of view. Parsing is the ingestion
//! boundary: malformed dates and timestamps are rejected here, never passed on.

use std::collections::HashSet;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Activity, CaseRecord, ClientRecord, Task};
use crate::errors::CoreError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(default)]
    pub cases: Vec<CaseRecord>,
    #[serde(default)]
    pub clients: Vec<ClientRecord>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub activity: Vec<Activity>,
}

impl Snapshot {
    /// Parse a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] with the JSON location when any field
    /// is malformed, including calendar dates that are not `YYYY-MM-DD`.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let snapshot: Self = serde_json::from_str(raw).map_err(|error| {
            CoreError::Validation(format!(
                "snapshot rejected at line {} column {}: {error}",
                error.line(),
                error.column()
            ))
        })?;
        tracing::debug!(
            cases = snapshot.cases.len(),
            clients = snapshot.clients.len(),
            tasks = snapshot.tasks.len(),
            activity = snapshot.activity.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Read and parse a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the file does not exist and
    /// [`CoreError::Validation`] if its contents are malformed.
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                CoreError::NotFound {
                    entity_type: "snapshot".to_string(),
                    id: path.display().to_string(),
                }
            } else {
                CoreError::Other(anyhow::Error::new(error).context(format!(
                    "failed to read snapshot {}",
                    path.display()
                )))
            }
        })?;
        Self::from_json(&raw)
    }

    /// Check cross-record consistency that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming every duplicated case number.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for case in &self.cases {
            if !seen.insert(case.case_number.as_str()) && !duplicates.contains(&case.case_number) {
                duplicates.push(case.case_number.clone());
            }
        }

        if duplicates.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "duplicate case numbers: {}",
                duplicates.join(", ")
            )))
        }
    }

    /// Look up a case by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no case has that id.
    pub fn case(&self, id: &str) -> Result<&CaseRecord, CoreError> {
        self.cases
            .iter()
            .find(|case| case.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "case".to_string(),
                id: id.to_string(),
            })
    }
}
