//! Cross-cutting error types for the data model.
//!
//! Transport and configuration errors live in their own crates
//! (`ApiError`, `ConfigError`); this module only covers failures that can be
//! detected from the values themselves.

use thiserror::Error;

/// Errors raised while building or parsing core values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A value failed a client-side constraint check.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A string did not name any known variant of an enum.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// A timestamp could not be parsed as RFC 3339 or a naive ISO-8601 date-time.
    #[error("Invalid timestamp '{value}'")]
    InvalidTimestamp { value: String },
}
