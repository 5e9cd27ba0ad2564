use aat_client::ApiClient;
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PersonaCommands;
use crate::commands::fallback::{demo_personas, or_demo};
use crate::output::{output, output_listing};

/// Handle `aat persona`.
pub async fn handle(
    action: &PersonaCommands,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PersonaCommands::List => {
            let list = or_demo(client.list_personas().await, flags, "persona list", demo_personas)?;
            output_listing(&list, &list.personas, flags.format)
        }
        PersonaCommands::Get { id } => {
            let persona = client
                .get_persona(id)
                .await
                .with_context(|| format!("failed to fetch persona '{id}'"))?;
            output(&persona, flags.format)
        }
    }
}
