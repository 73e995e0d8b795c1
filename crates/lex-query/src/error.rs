//! Query error types for lex-query.

use lex_core::errors::CoreError;

/// Errors from derived-view construction.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Year/month pair does not name a calendar month.
    #[error("invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    /// Month text is not in `YYYY-MM` form.
    #[error("invalid month '{0}': expected YYYY-MM")]
    MonthFormat(String),

    /// Error from the core data layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}
