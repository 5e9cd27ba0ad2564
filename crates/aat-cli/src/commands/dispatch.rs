use aat_client::ApiClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, client: &ApiClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Health => commands::health::handle(client, flags).await,
        Commands::Persona { action } => commands::persona::handle(&action, client, flags).await,
        Commands::Analysis { action } => commands::analysis::handle(&action, client, flags).await,
        Commands::Contract { action } => commands::contract::handle(&action, client, flags).await,
        Commands::Scrape { action } => commands::scrape::handle(&action, client, flags).await,
    }
}
