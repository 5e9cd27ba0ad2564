//! Platform, contract, export and job-status enums.
//!
//! All enums serialize as lowercase strings, matching the analysis service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Content platform a persona is observed on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Reddit,
    Youtube,
}

impl Platform {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reddit => "reddit",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reddit" => Ok(Self::Reddit),
            "youtube" => Ok(Self::Youtube),
            _ => Err(CoreError::UnknownVariant {
                kind: "platform",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ContractFormat
// ---------------------------------------------------------------------------

/// Presentation style requested for a generated contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContractFormat {
    Detailed,
    Summary,
    Legal,
}

impl ContractFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::Summary => "summary",
            Self::Legal => "legal",
        }
    }
}

impl fmt::Display for ContractFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(Self::Detailed),
            "summary" => Ok(Self::Summary),
            "legal" => Ok(Self::Legal),
            _ => Err(CoreError::UnknownVariant {
                kind: "contract format",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ExportFormat
// ---------------------------------------------------------------------------

/// File format for exporting a stored contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Markdown,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(CoreError::UnknownVariant {
                kind: "export format",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ScrapeStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a backend scrape job.
///
/// ```text
/// queued → running → completed
///                  → failed
/// queued | running → cancelled
/// ```
///
/// States the client does not know yet deserialize as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeStatus {
    Queued,
    Running,
    Completed,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl ScrapeStatus {
    /// Whether the job will make no further progress.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ScrapeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_defaults_to_reddit() {
        assert_eq!(Platform::default(), Platform::Reddit);
        assert_eq!(Platform::default().as_str(), "reddit");
    }

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!("YouTube".parse::<Platform>().unwrap(), Platform::Youtube);
        assert_eq!(" reddit ".parse::<Platform>().unwrap(), Platform::Reddit);
    }

    #[test]
    fn platform_rejects_unknown() {
        let err = "tiktok".parse::<Platform>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownVariant {
                kind: "platform",
                value: "tiktok".into()
            }
        );
    }

    #[test]
    fn platform_wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&Platform::Youtube).unwrap(), "\"youtube\"");
    }

    #[test]
    fn contract_format_display_matches_wire() {
        for format in [
            ContractFormat::Detailed,
            ContractFormat::Summary,
            ContractFormat::Legal,
        ] {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{format}\""));
        }
    }

    #[test]
    fn export_format_accepts_md_alias() {
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
    }

    #[test]
    fn unknown_scrape_status_is_tolerated() {
        let status: ScrapeStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(status, ScrapeStatus::Unknown);
        assert!(!status.is_terminal());
    }

    #[test]
    fn terminal_states() {
        assert!(ScrapeStatus::Completed.is_terminal());
        assert!(ScrapeStatus::Failed.is_terminal());
        assert!(ScrapeStatus::Cancelled.is_terminal());
        assert!(!ScrapeStatus::Queued.is_terminal());
        assert!(!ScrapeStatus::Running.is_terminal());
    }
}
