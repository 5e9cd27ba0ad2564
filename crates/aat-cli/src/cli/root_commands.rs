use clap::Subcommand;

use crate::cli::subcommands::{AnalysisCommands, ContractCommands, PersonaCommands, ScrapeCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check that the analysis service is up.
    Health,
    /// Synthetic user personas.
    Persona {
        #[command(subcommand)]
        action: PersonaCommands,
    },
    /// Analysis results.
    Analysis {
        #[command(subcommand)]
        action: AnalysisCommands,
    },
    /// Accountability contracts.
    Contract {
        #[command(subcommand)]
        action: ContractCommands,
    },
    /// Content collection jobs.
    Scrape {
        #[command(subcommand)]
        action: ScrapeCommands,
    },
}
