use aat_core::Platform;
use clap::Subcommand;

/// Analysis result commands. `--platform` defaults to the configured platform.
#[derive(Clone, Debug, Subcommand)]
pub enum AnalysisCommands {
    /// Cross-persona summary and key findings.
    Summary {
        #[arg(long)]
        platform: Option<Platform>,
    },
    /// Topic modeling results.
    Topics {
        #[arg(long)]
        platform: Option<Platform>,
        /// Drop topics below this coherence score.
        #[arg(long)]
        min_coherence: Option<f64>,
    },
    /// Bias breakdown for a persona.
    Bias {
        persona_id: String,
        #[arg(long)]
        platform: Option<Platform>,
    },
    /// Filter-bubble and echo-chamber metrics for a persona.
    Diversity {
        persona_id: String,
        #[arg(long)]
        platform: Option<Platform>,
    },
    /// Stance detection results for a persona.
    Stance {
        persona_id: String,
        #[arg(long)]
        platform: Option<Platform>,
    },
}
