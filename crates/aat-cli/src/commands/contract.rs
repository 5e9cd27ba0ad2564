use aat_client::ApiClient;
use aat_core::ContractRequest;
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContractCommands;
use crate::output::{output, output_listing};

/// Handle `aat contract`.
pub async fn handle(
    action: &ContractCommands,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ContractCommands::List => {
            let listing = client
                .list_contracts()
                .await
                .context("failed to list contracts")?;
            output_listing(&listing, &listing.contracts, flags.format)
        }
        ContractCommands::Get { id } => {
            let contract = client
                .get_contract(id)
                .await
                .with_context(|| format!("failed to fetch contract '{id}'"))?;
            output(&contract, flags.format)
        }
        ContractCommands::Generate {
            platform,
            persona,
            no_evidence,
            no_visualizations,
            style,
        } => {
            let request = build_request(*platform, persona, *no_evidence, *no_visualizations, *style);
            let contract = client
                .generate_contract(&request)
                .await
                .context("contract generation failed")?;
            output(&contract, flags.format)
        }
        ContractCommands::Delete { id } => {
            let ack = client
                .delete_contract(id)
                .await
                .with_context(|| format!("failed to delete contract '{id}'"))?;
            output(&ack, flags.format)
        }
        ContractCommands::Export { id, as_format } => {
            let export = client
                .export_contract(id, *as_format)
                .await
                .with_context(|| format!("failed to export contract '{id}'"))?;
            output(&export, flags.format)
        }
    }
}

/// Only explicit opt-outs are sent; otherwise the service decides.
fn build_request(
    platform: aat_core::Platform,
    personas: &[String],
    no_evidence: bool,
    no_visualizations: bool,
    style: Option<aat_core::ContractFormat>,
) -> ContractRequest {
    let mut request = ContractRequest::new(platform, personas.iter().cloned());
    if no_evidence {
        request = request.with_evidence(false);
    }
    if no_visualizations {
        request = request.with_visualizations(false);
    }
    if let Some(style) = style {
        request = request.with_format(style);
    }
    request
}

#[cfg(test)]
mod tests {
    use aat_core::{ContractFormat, Platform};
    use pretty_assertions::assert_eq;

    use super::build_request;

    #[test]
    fn defaults_leave_options_unset() {
        let request = build_request(Platform::Reddit, &["a".to_string()], false, false, None);
        assert_eq!(request.include_evidence, None);
        assert_eq!(request.include_visualizations, None);
        assert_eq!(request.format, None);
    }

    #[test]
    fn opt_outs_are_explicit() {
        let request = build_request(
            Platform::Youtube,
            &["a".to_string(), "b".to_string()],
            true,
            true,
            Some(ContractFormat::Summary),
        );
        assert_eq!(request.include_evidence, Some(false));
        assert_eq!(request.include_visualizations, Some(false));
        assert_eq!(request.format, Some(ContractFormat::Summary));
        assert_eq!(request.persona_ids, vec!["a", "b"]);
    }
}
