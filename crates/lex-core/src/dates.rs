//! Calendar-date parsing for deadline and task dates.
//!
//! Deadline and task dates are plain ISO calendar dates (`YYYY-MM-DD`) with no
//! time or timezone component. Anything else is rejected at ingestion so that
//! downstream comparisons only ever see valid dates.

use chrono::NaiveDate;

use crate::errors::CoreError;

/// Wire format for calendar dates.
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if `raw` is not a valid calendar date.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), CALENDAR_DATE_FORMAT)
        .map_err(|error| CoreError::Validation(format!("invalid calendar date '{raw}': {error}")))
}

/// Serde adapter for `NaiveDate` fields carried as `YYYY-MM-DD` strings.
///
/// Use together with `#[schemars(with = "NaiveDate")]` so the generated schema
/// still describes a date string.
pub mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::{CALENDAR_DATE_FORMAT, parse_calendar_date};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(CALENDAR_DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_calendar_date(&raw).map_err(de::Error::custom)
    }
}
