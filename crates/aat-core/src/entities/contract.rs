//! Contract generation request and the generated document.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ContractFormat, Platform};
use crate::errors::CoreError;

/// Parameters for generating an accountability contract.
///
/// Unset options are left out of the JSON body so the backend applies its
/// own defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContractRequest {
    pub platform: Platform,
    pub persona_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_evidence: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_visualizations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ContractFormat>,
}

impl ContractRequest {
    pub fn new<I, S>(platform: Platform, persona_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            platform,
            persona_ids: persona_ids.into_iter().map(Into::into).collect(),
            include_evidence: None,
            include_visualizations: None,
            format: None,
        }
    }

    #[must_use]
    pub const fn with_evidence(mut self, include: bool) -> Self {
        self.include_evidence = Some(include);
        self
    }

    #[must_use]
    pub const fn with_visualizations(mut self, include: bool) -> Self {
        self.include_visualizations = Some(include);
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: ContractFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Check the request is meaningful before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if no persona is named or a persona
    /// id is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.persona_ids.is_empty() {
            return Err(CoreError::Validation(
                "contract request needs at least one persona id".into(),
            ));
        }
        if self.persona_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(CoreError::Validation("persona ids must not be blank".into()));
        }
        Ok(())
    }
}

/// A titled block of contract content. `content` may carry light markdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContractSection {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<BTreeMap<String, String>>,
}

/// Chart data attached to a contract (`pie`, `bar`, `sankey`, `network`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ContractVisualization {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// A generated report describing inferred algorithmic behavior.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Contract {
    pub id: String,
    pub platform: String,
    #[serde(default)]
    pub personas_analyzed: Vec<String>,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "DateTime<Utc>")]
    pub generation_date: DateTime<Utc>,
    pub title: String,
    pub executive_summary: String,
    pub sections: Vec<ContractSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualizations: Option<Vec<ContractVisualization>>,
    #[serde(default)]
    pub methodology_note: String,
    #[serde(default)]
    pub raw_statistics: BTreeMap<String, serde_json::Value>,
}

impl Contract {
    /// Look up a section by exact title.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&ContractSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// Listing entry for a previously generated contract.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContractSummary {
    pub id: String,
    pub platform: String,
    pub title: String,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "DateTime<Utc>")]
    pub generation_date: DateTime<Utc>,
    #[serde(default)]
    pub personas_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContractListing {
    pub contracts: Vec<ContractSummary>,
    pub total: u64,
}

/// Response of the contract export endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContractExport {
    pub message: String,
    pub contract_id: String,
    pub format: String,
}
