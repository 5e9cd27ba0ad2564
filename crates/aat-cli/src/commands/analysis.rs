use aat_client::ApiClient;
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnalysisCommands;
use crate::commands::fallback::{demo_summary, or_demo};
use crate::output::output;

/// Handle `aat analysis`.
pub async fn handle(
    action: &AnalysisCommands,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnalysisCommands::Summary { platform } => {
            let platform = platform.unwrap_or(client.defaults().platform);
            let summary = or_demo(
                client.analysis_summary(Some(platform)).await,
                flags,
                "analysis summary",
                || demo_summary(platform),
            )?;
            output(&summary, flags.format)
        }
        AnalysisCommands::Topics {
            platform,
            min_coherence,
        } => {
            let topics = match min_coherence {
                Some(min) => client.topic_analysis_filtered(*platform, *min).await,
                None => client.topic_analysis(*platform).await,
            }
            .context("failed to fetch topic analysis")?;
            output(&topics, flags.format)
        }
        AnalysisCommands::Bias {
            persona_id,
            platform,
        } => {
            let bias = client
                .bias_analysis(persona_id, *platform)
                .await
                .with_context(|| format!("failed to fetch bias analysis for '{persona_id}'"))?;
            output(&bias, flags.format)
        }
        AnalysisCommands::Diversity {
            persona_id,
            platform,
        } => {
            let diversity = client
                .diversity_analysis(persona_id, *platform)
                .await
                .with_context(|| {
                    format!("failed to fetch diversity analysis for '{persona_id}'")
                })?;
            output(&diversity, flags.format)
        }
        AnalysisCommands::Stance {
            persona_id,
            platform,
        } => {
            let stance = client
                .stance_analysis(persona_id, *platform)
                .await
                .with_context(|| format!("failed to fetch stance analysis for '{persona_id}'"))?;
            output(&stance, flags.format)
        }
    }
}
