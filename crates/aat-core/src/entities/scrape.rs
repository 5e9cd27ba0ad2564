use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Platform, ScrapeStatus};

/// Body of a scrape job start request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub persona_ids: Vec<String>,
    pub platform: Platform,
    pub max_items: u32,
}

/// Handle for an asynchronous backend scrape job.
///
/// The client only starts and polls jobs; it never executes them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScrapeJob {
    pub job_id: String,
    pub status: ScrapeStatus,
    pub platform: String,
    #[serde(default)]
    pub persona_ids: Vec<String>,
    /// Completion fraction in `0.0..=1.0`.
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub items_collected: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScrapeJobList {
    pub jobs: Vec<ScrapeJob>,
    pub total: u64,
}
