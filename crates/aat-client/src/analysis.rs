//! Analysis endpoints.
//!
//! Every per-platform query sends `platform` explicitly; `None` resolves to
//! the client's configured default.

use aat_core::{
    AnalysisSummary, BiasAnalysis, DiversityAnalysis, Platform, StanceAnalysis, TopicAnalysis,
};

use crate::{ApiClient, error::ApiError, segment};

impl ApiClient {
    /// Cross-persona summary of the latest analysis run on a platform.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service returns a
    /// non-success status, or the body does not match [`AnalysisSummary`].
    pub async fn analysis_summary(
        &self,
        platform: Option<Platform>,
    ) -> Result<AnalysisSummary, ApiError> {
        let platform = self.platform_or_default(platform);
        self.get_json(
            &format!("/analysis/summary?platform={platform}"),
            "analysis summary",
        )
        .await
    }

    /// Topic modeling results for a platform.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn topic_analysis(&self, platform: Option<Platform>) -> Result<TopicAnalysis, ApiError> {
        let platform = self.platform_or_default(platform);
        self.get_json(
            &format!("/analysis/topics?platform={platform}"),
            "topic analysis",
        )
        .await
    }

    /// Topic modeling results, keeping only topics at or above
    /// `min_coherence` (filtered by the service).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if `min_coherence` is not a
    /// finite number, otherwise as [`Self::topic_analysis`].
    pub async fn topic_analysis_filtered(
        &self,
        platform: Option<Platform>,
        min_coherence: f64,
    ) -> Result<TopicAnalysis, ApiError> {
        if !min_coherence.is_finite() {
            return Err(ApiError::InvalidRequest(format!(
                "min_coherence must be finite, got {min_coherence}"
            )));
        }
        let platform = self.platform_or_default(platform);
        self.get_json(
            &format!("/analysis/topics?platform={platform}&min_coherence={min_coherence}"),
            "topic analysis",
        )
        .await
    }

    /// Bias breakdown of the content recommended to one persona.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn bias_analysis(
        &self,
        persona_id: &str,
        platform: Option<Platform>,
    ) -> Result<BiasAnalysis, ApiError> {
        let platform = self.platform_or_default(platform);
        self.get_json(
            &format!("/analysis/bias/{}?platform={platform}", segment(persona_id)?),
            "bias analysis",
        )
        .await
    }

    /// Filter-bubble and echo-chamber metrics for one persona.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn diversity_analysis(
        &self,
        persona_id: &str,
        platform: Option<Platform>,
    ) -> Result<DiversityAnalysis, ApiError> {
        let platform = self.platform_or_default(platform);
        self.get_json(
            &format!(
                "/analysis/diversity/{}?platform={platform}",
                segment(persona_id)?
            ),
            "diversity analysis",
        )
        .await
    }

    /// Per-topic stance detection for one persona.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn stance_analysis(
        &self,
        persona_id: &str,
        platform: Option<Platform>,
    ) -> Result<StanceAnalysis, ApiError> {
        let platform = self.platform_or_default(platform);
        self.get_json(
            &format!("/analysis/stance/{}?platform={platform}", segment(persona_id)?),
            "stance analysis",
        )
        .await
    }
}
