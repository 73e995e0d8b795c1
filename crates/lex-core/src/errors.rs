//! Cross-cutting error types for LexDesk.
//!
//! Domain-specific errors (`ConfigError`, `QueryError`) are defined in their
//! respective crates. The CLI converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any LexDesk crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input data failed validation (malformed dates, duplicate keys, bad JSON).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
