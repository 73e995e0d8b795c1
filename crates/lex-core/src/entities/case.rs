use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Deadline;
use crate::enums::{CaseStatus, CaseType};

/// Client reference embedded in a case.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClientSummary {
    pub id: String,
    pub name: String,
}

/// A client's legal matter being tracked through the workflow.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub id: String,
    /// Displayed case number. Unique in practice, used as a search key.
    pub case_number: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Missing when the client record could not be resolved.
    #[serde(default)]
    pub client: Option<ClientSummary>,
    pub status: CaseStatus,
    pub case_type: CaseType,
    #[serde(default)]
    pub assigned_lawyer: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub deadlines: Vec<Deadline>,
}

impl CaseRecord {
    /// Name of the linked client, if any.
    #[must_use]
    pub fn client_name(&self) -> Option<&str> {
        self.client.as_ref().map(|client| client.name.as_str())
    }
}
