use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `aat` binary.
#[derive(Debug, Parser)]
#[command(
    name = "aat",
    version,
    about = "Algorithmic accountability analysis client"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API root, overriding configuration (e.g. http://localhost:8000/api)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Show bundled demo data when a persona or summary request fails.
    /// The failure is still logged.
    #[arg(long, global = true)]
    pub demo_fallback: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            base_url: self.base_url.clone(),
            demo_fallback: self.demo_fallback,
        }
    }
}
