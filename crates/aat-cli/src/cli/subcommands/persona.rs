use clap::Subcommand;

/// Persona commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PersonaCommands {
    /// List all personas.
    List,
    /// Get a persona by ID.
    Get { id: String },
}
