//! Client error types.

use aat_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the analysis service.
///
/// Nothing is retried or masked: every failure reaches the caller, which
/// decides whether to fall back.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// `detail` field of the error body, or the raw body.
        message: String,
    },

    /// A success response did not match the expected schema.
    #[error("failed to decode {context} response: {source}")]
    Decode {
        /// Which endpoint produced the body.
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request was rejected before being sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl ApiError {
    /// HTTP status code, if the service produced one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Whether the request never got an HTTP answer.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        Self::InvalidRequest(error.to_string())
    }
}
