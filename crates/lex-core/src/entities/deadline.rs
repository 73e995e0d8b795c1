use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;

/// A date-bound obligation attached to a case.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Deadline {
    pub id: String,
    #[serde(with = "crate::dates::calendar_date")]
    #[schemars(with = "NaiveDate")]
    pub date: NaiveDate,
    pub description: String,
    pub priority: Priority,
}
