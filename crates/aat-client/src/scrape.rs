//! Scrape job endpoints.
//!
//! Starting a job returns immediately with a handle; collection happens on
//! the service and is observed by polling [`ApiClient::get_scrape_job`].

use aat_core::{Acknowledgement, Platform, ScrapeJob, ScrapeJobList, ScrapeRequest};

use crate::{ApiClient, error::ApiError, segment};

impl ApiClient {
    /// Start a Reddit collection job. `None` uses the default item cap (100).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn start_reddit_scrape(
        &self,
        persona_ids: &[String],
        max_items: Option<u32>,
    ) -> Result<ScrapeJob, ApiError> {
        self.start_scrape(Platform::Reddit, persona_ids, max_items)
            .await
    }

    /// Start a YouTube collection job. `None` uses the default item cap (100).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn start_youtube_scrape(
        &self,
        persona_ids: &[String],
        max_items: Option<u32>,
    ) -> Result<ScrapeJob, ApiError> {
        self.start_scrape(Platform::Youtube, persona_ids, max_items)
            .await
    }

    /// List all scrape jobs known to the service.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn list_scrape_jobs(&self) -> Result<ScrapeJobList, ApiError> {
        self.get_json("/scrape/jobs", "scrape job list").await
    }

    /// Poll one scrape job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn get_scrape_job(&self, job_id: &str) -> Result<ScrapeJob, ApiError> {
        self.get_json(&format!("/scrape/jobs/{}", segment(job_id)?), "scrape job")
            .await
    }

    /// Ask the service to cancel a scrape job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn cancel_scrape_job(&self, job_id: &str) -> Result<Acknowledgement, ApiError> {
        self.delete_json(
            &format!("/scrape/jobs/{}", segment(job_id)?),
            "scrape job cancellation",
        )
        .await
    }

    async fn start_scrape(
        &self,
        platform: Platform,
        persona_ids: &[String],
        max_items: Option<u32>,
    ) -> Result<ScrapeJob, ApiError> {
        let request = ScrapeRequest {
            persona_ids: persona_ids.to_vec(),
            platform,
            max_items: self.max_items_or_default(max_items),
        };
        let job: ScrapeJob = self
            .post_json(&format!("/scrape/{platform}"), &request, "scrape job")
            .await?;
        tracing::info!(
            job_id = %job.job_id,
            %platform,
            max_items = request.max_items,
            status = %job.status,
            "scrape job started"
        );
        Ok(job)
    }
}
