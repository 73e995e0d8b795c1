use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;

/// A to-do item, optionally linked to a case or a client.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub description: String,
    #[serde(with = "crate::dates::calendar_date")]
    #[schemars(with = "NaiveDate")]
    pub due_date: NaiveDate,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub case_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
}
