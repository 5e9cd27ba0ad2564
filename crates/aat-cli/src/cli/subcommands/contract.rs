use aat_core::{ContractFormat, ExportFormat, Platform};
use clap::Subcommand;

/// Contract commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ContractCommands {
    /// List generated contracts.
    List,
    /// Get a contract by ID.
    Get { id: String },
    /// Generate a contract (may take a long time).
    Generate {
        #[arg(long, default_value = "reddit")]
        platform: Platform,
        /// Persona ID to include (repeatable).
        #[arg(long, required = true)]
        persona: Vec<String>,
        /// Leave supporting evidence out of the sections.
        #[arg(long)]
        no_evidence: bool,
        /// Leave chart data out of the contract.
        #[arg(long)]
        no_visualizations: bool,
        /// Contract style: detailed, summary, legal
        #[arg(long)]
        style: Option<ContractFormat>,
    },
    /// Delete a contract.
    Delete { id: String },
    /// Export a contract: pdf, markdown, json
    Export {
        id: String,
        #[arg(long = "as", value_name = "FORMAT", default_value = "pdf")]
        as_format: ExportFormat,
    },
}
