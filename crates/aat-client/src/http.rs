//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks and body decoding so the endpoint
//! modules stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Return the response unchanged on success, or [`ApiError::Api`] carrying
/// the status code and the error message from the body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Decode a success body into `T`, keeping schema mismatches apart from
/// transport errors.
pub async fn decode<T: DeserializeOwned>(
    resp: reqwest::Response,
    context: &str,
) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
        context: context.to_string(),
        source,
    })
}

/// Pull `detail` out of a JSON error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| match value.get("detail") {
            Some(serde_json::Value::String(detail)) => Some(detail.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        })
        .unwrap_or_else(|| body.trim().to_string())
}
