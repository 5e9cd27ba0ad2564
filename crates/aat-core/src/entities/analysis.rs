//! Analysis payloads: summary, topics, bias, diversity and stance.
//!
//! The backend computes these; the client only validates their shape.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Read-only snapshot of cross-persona analysis results.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub platform: String,
    pub total_content_analyzed: u64,
    pub personas_analyzed: u64,
    #[serde(default)]
    pub key_findings: Vec<String>,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "DateTime<Utc>")]
    pub analysis_date: DateTime<Utc>,
}

// ── Topics ─────────────────────────────────────────────────────────

/// A topic discovered by topic modeling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TopicInfo {
    pub topic_id: i64,
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub size: u64,
    pub coherence_score: f64,
}

/// Share of each topic label in one persona's recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TopicDistribution {
    pub persona_id: String,
    pub persona_name: String,
    pub topics: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TopicAnalysis {
    pub topics: Vec<TopicInfo>,
    #[serde(default)]
    pub distributions: Vec<TopicDistribution>,
    pub total_documents: u64,
    pub num_topics: u64,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "DateTime<Utc>")]
    pub analysis_date: DateTime<Utc>,
}

impl TopicAnalysis {
    /// Topic with the highest coherence score, if any.
    #[must_use]
    pub fn most_coherent(&self) -> Option<&TopicInfo> {
        self.topics
            .iter()
            .max_by(|a, b| a.coherence_score.total_cmp(&b.coherence_score))
    }
}

// ── Bias ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BiasScore {
    /// `left`, `center` or `right`.
    pub political_bias: String,
    pub political_confidence: f64,
    /// Keyed by tone (`fear`, `anger`, `hope`, `neutral`).
    #[serde(default)]
    pub emotional_tone: BTreeMap<String, f64>,
    pub fact_opinion_ratio: f64,
    pub sensationalism_score: f64,
    pub composite_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BiasAnalysis {
    pub persona_id: String,
    pub platform: String,
    pub sample_size: u64,
    pub average_bias: BiasScore,
    /// Item counts per bias category.
    #[serde(default)]
    pub content_breakdown: BTreeMap<String, u64>,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "DateTime<Utc>")]
    pub analysis_date: DateTime<Utc>,
}

// ── Diversity ──────────────────────────────────────────────────────

/// Filter-bubble metrics, each in `0.0..=1.0`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DiversityMetrics {
    pub topic_diversity: f64,
    pub stance_diversity: f64,
    pub source_diversity: f64,
    /// Higher means a stronger echo chamber.
    pub echo_chamber_score: f64,
    pub ideological_consistency: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DiversityAnalysis {
    pub persona_id: String,
    pub platform: String,
    pub metrics: DiversityMetrics,
    /// Delta from the cross-persona average, per metric name.
    #[serde(default)]
    pub comparison_to_average: BTreeMap<String, f64>,
    pub filter_bubble_detected: bool,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "DateTime<Utc>")]
    pub analysis_date: DateTime<Utc>,
}

// ── Stance ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StanceResult {
    pub topic: String,
    /// `favor`, `against` or `neutral`.
    pub stance: String,
    pub confidence: f64,
    pub sample_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StanceAnalysis {
    pub persona_id: String,
    pub platform: String,
    pub stances: Vec<StanceResult>,
    pub overall_leaning: String,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "DateTime<Utc>")]
    pub analysis_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPICS: &str = r#"{
        "topics": [
            {"topic_id": 0, "label": "Climate", "keywords": ["climate"], "size": 1250, "coherence_score": 0.78},
            {"topic_id": 1, "label": "Technology & AI", "keywords": ["ai"], "size": 980, "coherence_score": 0.82}
        ],
        "distributions": [
            {"persona_id": "tech_enthusiast", "persona_name": "Tech Enthusiast",
             "topics": {"Technology & AI": 0.65, "Climate": 0.35}}
        ],
        "total_documents": 5000,
        "num_topics": 2,
        "analysis_date": "2026-03-01T10:00:00.000001"
    }"#;

    #[test]
    fn parse_topic_analysis_with_naive_date() {
        let analysis: TopicAnalysis = serde_json::from_str(TOPICS).unwrap();
        assert_eq!(analysis.topics.len(), 2);
        assert_eq!(analysis.distributions[0].topics["Technology & AI"], 0.65);
        assert_eq!(analysis.most_coherent().unwrap().label, "Technology & AI");
    }

    #[test]
    fn most_coherent_on_empty_is_none() {
        let mut analysis: TopicAnalysis = serde_json::from_str(TOPICS).unwrap();
        analysis.topics.clear();
        assert!(analysis.most_coherent().is_none());
    }

    #[test]
    fn summary_rejects_missing_counts() {
        let json = r#"{"platform": "reddit", "key_findings": [], "analysis_date": "2026-03-01T10:00:00"}"#;
        assert!(serde_json::from_str::<AnalysisSummary>(json).is_err());
    }
}
