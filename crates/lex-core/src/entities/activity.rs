use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActivityType;

/// An entry in the case activity log.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub activity_type: ActivityType,
    pub case_number: String,
    pub case_id: String,
    pub timestamp: DateTime<Utc>,
    pub user: String,
}
