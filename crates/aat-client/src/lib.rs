//! # aat-client
//!
//! Typed HTTP client for the algorithmic accountability analysis service.
//!
//! Every method is a single request/response exchange against the API root
//! (`http://localhost:8000/api` by default):
//! - personas: list and fetch synthetic user profiles
//! - analysis: summary, topic, bias, diversity and stance results
//! - contracts: generate, list, fetch, delete and export reports
//! - scrape: start, list, poll and cancel backend collection jobs
//! - health: liveness probe
//!
//! The client holds no mutable state. Clones share the connection pool and
//! can be used from any number of tasks at once. There are no retries, no
//! caching and no request deduplication; callers layer those on if needed.

mod analysis;
mod contracts;
mod error;
mod health;
mod http;
mod personas;
mod scrape;

pub use error::ApiError;

use std::time::Duration;

use aat_config::{AatConfig, DefaultsConfig};
use aat_core::Platform;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use crate::http::{check_response, decode};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the analysis service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    defaults: DefaultsConfig,
}

impl ApiClient {
    /// Client for `base_url` with a default `reqwest::Client` and built-in
    /// defaults (`reddit`, 100 items).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Client that sends through an injected `reqwest::Client`.
    #[must_use]
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            defaults: DefaultsConfig::default(),
        }
    }

    /// Build a client from loaded configuration.
    ///
    /// Applies the user agent, optional timeout and extra headers from
    /// `config.api`, and the per-call defaults from `config.defaults`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Build`] if a configured header is not a valid
    /// HTTP header or the `reqwest::Client` fails to build.
    pub fn from_config(config: &AatConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.api.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::Build(format!("header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::Build(format!("header '{name}' value: {e}")))?;
            headers.insert(name, value);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(config.api.user_agent.clone())
            .default_headers(headers);
        if let Some(secs) = config.api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;

        Ok(Self::with_http(http, config.api.base_url.clone()).with_defaults(config.defaults.clone()))
    }

    /// Replace the per-call defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: DefaultsConfig) -> Self {
        self.defaults = defaults;
        self
    }

    /// API root without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn platform_or_default(&self, platform: Option<Platform>) -> Platform {
        platform.unwrap_or(self.defaults.platform)
    }

    fn max_items_or_default(&self, max_items: Option<u32>) -> u32 {
        max_items.unwrap_or(self.defaults.max_items)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, context: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(method = "GET", %url, "sending request");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode(resp, context).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, context: &str) -> Result<T, ApiError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(method = "POST", %url, "sending request");
        let resp = check_response(self.http.post(&url).json(body).send().await?).await?;
        decode(resp, context).await
    }

    /// POST without a body; parameters travel in the query string.
    async fn post_empty<T: DeserializeOwned>(&self, path: &str, context: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(method = "POST", %url, "sending request");
        let resp = check_response(self.http.post(&url).send().await?).await?;
        decode(resp, context).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str, context: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(method = "DELETE", %url, "sending request");
        let resp = check_response(self.http.delete(&url).send().await?).await?;
        decode(resp, context).await
    }
}

/// Percent-encode a single path segment. A blank id would address the
/// collection route instead, so it is rejected before any request.
fn segment(value: &str) -> Result<std::borrow::Cow<'_, str>, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidRequest("identifier must not be blank".into()));
    }
    Ok(urlencoding::encode(value))
}
