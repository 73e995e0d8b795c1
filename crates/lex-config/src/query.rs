//! List view configuration: page sizes, search debounce, quick-find limit.

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_case_page_size() -> usize {
    10
}

const fn default_client_page_size() -> usize {
    9
}

const fn default_search_debounce_ms() -> u64 {
    300
}

const fn default_quick_find_limit() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Rows per page in the case list.
    #[serde(default = "default_case_page_size")]
    pub case_page_size: usize,

    /// Cards per page in the client grid.
    #[serde(default = "default_client_page_size")]
    pub client_page_size: usize,

    /// Quiet period before a typed search term is applied.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Maximum hits returned by quick find.
    #[serde(default = "default_quick_find_limit")]
    pub quick_find_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            case_page_size: default_case_page_size(),
            client_page_size: default_client_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
            quick_find_limit: default_quick_find_limit(),
        }
    }
}

impl QueryConfig {
    /// Case page size as a non-zero value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the page size is zero.
    pub fn case_page_size(&self) -> Result<NonZeroUsize, ConfigError> {
        non_zero("query.case_page_size", self.case_page_size)
    }

    /// Client page size as a non-zero value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the page size is zero.
    pub fn client_page_size(&self) -> Result<NonZeroUsize, ConfigError> {
        non_zero("query.client_page_size", self.client_page_size)
    }

    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

fn non_zero(field: &str, value: usize) -> Result<NonZeroUsize, ConfigError> {
    NonZeroUsize::new(value).ok_or_else(|| ConfigError::InvalidValue {
        field: field.to_string(),
        reason: "must be greater than zero".to_string(),
    })
}
