//! Liveness probe.

use aat_core::HealthStatus;

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// Ask the service whether it is up.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service returns a
    /// non-success status, or the body does not match [`HealthStatus`].
    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health", "health").await
    }
}
