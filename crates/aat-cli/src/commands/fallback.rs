//! Offline demo data, substituted only when `--demo-fallback` is given.

use aat_client::ApiError;
use aat_core::{AnalysisSummary, Persona, PersonaList, Platform};
use anyhow::Context;
use chrono::Utc;

use crate::cli::GlobalFlags;

/// Return `result`, or demo data from `demo` if the call failed and the user
/// asked for the fallback. The failure is always logged.
pub fn or_demo<T>(
    result: Result<T, ApiError>,
    flags: &GlobalFlags,
    operation: &str,
    demo: impl FnOnce() -> T,
) -> anyhow::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(error) if flags.demo_fallback => {
            tracing::warn!(%error, operation, "request failed; showing demo data");
            Ok(demo())
        }
        Err(error) => Err(error).with_context(|| format!("{operation} failed")),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

pub fn demo_personas() -> PersonaList {
    let personas = vec![
        Persona {
            id: "progressive_activist".into(),
            name: "Progressive Activist".into(),
            description: "Passionate about social justice, climate action, and progressive policies."
                .into(),
            interests: strings(&["climate change", "social justice", "renewable energy"]),
            ideological_leaning: "left".into(),
            subreddits: strings(&["r/politics", "r/climate", "r/progressive"]),
            youtube_channels: strings(&["Democracy Now", "Majority Report"]),
            search_terms: strings(&["climate crisis solutions", "wealth inequality"]),
        },
        Persona {
            id: "conservative_traditional".into(),
            name: "Conservative Traditional".into(),
            description: "Values traditional family structures and conservative economic policies."
                .into(),
            interests: strings(&["traditional values", "free market", "small government"]),
            ideological_leaning: "right".into(),
            subreddits: strings(&["r/Conservative", "r/Republican", "r/Libertarian"]),
            youtube_channels: strings(&["Daily Wire", "PragerU"]),
            search_terms: strings(&["conservative news", "free market economy"]),
        },
        Persona {
            id: "tech_enthusiast".into(),
            name: "Tech Enthusiast".into(),
            description: "Fascinated by technology, AI, startups, and innovation.".into(),
            interests: strings(&["artificial intelligence", "machine learning", "programming"]),
            ideological_leaning: "neutral".into(),
            subreddits: strings(&["r/technology", "r/programming", "r/MachineLearning"]),
            youtube_channels: strings(&["Linus Tech Tips", "Two Minute Papers"]),
            search_terms: strings(&["AI breakthroughs", "tech startup news"]),
        },
    ];
    PersonaList {
        total: personas.len() as u64,
        personas,
    }
}

pub fn demo_summary(platform: Platform) -> AnalysisSummary {
    AnalysisSummary {
        platform: platform.to_string(),
        total_content_analyzed: 10_000,
        personas_analyzed: 10,
        key_findings: strings(&[
            "78% of content matches user's existing ideological stance",
            "Average topic diversity score: 0.34/1.0 (low)",
            "Filter bubbles detected in 8/10 personas",
            "Sensational content ranks 2.3x higher than neutral content",
        ]),
        analysis_date: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::{ColorMode, OutputFormat};

    fn flags(demo_fallback: bool) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            color: ColorMode::Never,
            quiet: true,
            verbose: false,
            base_url: None,
            demo_fallback,
        }
    }

    fn failed() -> Result<PersonaList, ApiError> {
        Err(ApiError::InvalidRequest("unreachable".into()))
    }

    #[test]
    fn success_passes_through() {
        let live = PersonaList {
            personas: Vec::new(),
            total: 0,
        };
        let out = or_demo(Ok(live.clone()), &flags(true), "persona list", demo_personas).unwrap();
        assert_eq!(out, live);
    }

    #[test]
    fn failure_is_reported_without_flag() {
        let err = or_demo(failed(), &flags(false), "persona list", demo_personas).unwrap_err();
        assert!(err.to_string().contains("persona list failed"));
        assert!(err.downcast_ref::<ApiError>().is_some());
    }

    #[test]
    fn failure_uses_demo_with_flag() {
        let out = or_demo(failed(), &flags(true), "persona list", demo_personas).unwrap();
        assert_eq!(out.total, 3);
        assert_eq!(out.personas[0].id, "progressive_activist");
    }

    #[test]
    fn demo_summary_has_findings() {
        let summary = demo_summary(Platform::Reddit);
        assert_eq!(summary.personas_analyzed, 10);
        assert_eq!(summary.key_findings.len(), 4);
    }

    #[test]
    fn demo_summary_echoes_requested_platform() {
        let failed: Result<AnalysisSummary, ApiError> =
            Err(ApiError::InvalidRequest("unreachable".into()));
        let out = or_demo(failed, &flags(true), "analysis summary", || {
            demo_summary(Platform::Youtube)
        })
        .unwrap();
        assert_eq!(out.platform, "youtube");
    }
}
