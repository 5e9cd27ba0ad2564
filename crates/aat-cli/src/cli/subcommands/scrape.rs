use clap::{Args, Subcommand};

/// Scrape job commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ScrapeCommands {
    /// Start a Reddit collection job.
    Reddit(ScrapeArgs),
    /// Start a YouTube collection job.
    Youtube(ScrapeArgs),
    /// List scrape jobs.
    Jobs,
    /// Get a scrape job by ID.
    Job { id: String },
    /// Cancel a scrape job.
    Cancel { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct ScrapeArgs {
    /// Persona ID to collect for (repeatable).
    #[arg(long, required = true)]
    pub persona: Vec<String>,
    /// Item cap (defaults to the configured value, 100 out of the box).
    #[arg(long)]
    pub max_items: Option<u32>,
}
