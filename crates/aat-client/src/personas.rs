//! Persona endpoints.

use aat_core::{Persona, PersonaList};

use crate::{ApiClient, error::ApiError, segment};

impl ApiClient {
    /// List every persona known to the service.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service returns a
    /// non-success status, or the body does not match [`PersonaList`].
    pub async fn list_personas(&self) -> Result<PersonaList, ApiError> {
        self.get_json("/personas/", "persona list").await
    }

    /// Fetch one persona. An unknown id surfaces as the service's 404.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for a blank id without sending.
    /// Returns [`ApiError`] if the request fails, the service returns a
    /// non-success status, or the body does not match [`Persona`].
    pub async fn get_persona(&self, id: &str) -> Result<Persona, ApiError> {
        self.get_json(&format!("/personas/{}", segment(id)?), "persona")
            .await
    }
}
