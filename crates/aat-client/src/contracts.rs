//! Contract endpoints.

use aat_core::{Acknowledgement, Contract, ContractExport, ContractListing, ContractRequest, ExportFormat};

use crate::{ApiClient, error::ApiError, segment};

impl ApiClient {
    /// List previously generated contracts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn list_contracts(&self) -> Result<ContractListing, ApiError> {
        self.get_json("/contracts/", "contract list").await
    }

    /// Fetch one generated contract.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn get_contract(&self, id: &str) -> Result<Contract, ApiError> {
        self.get_json(&format!("/contracts/{}", segment(id)?), "contract")
            .await
    }

    /// Generate a contract and wait for the finished document.
    ///
    /// Generation can take arbitrarily long on the service side; no timeout
    /// applies unless one was configured on the client. The request is sent
    /// once and never retried.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] without sending anything if the
    /// request names no persona, otherwise [`ApiError`] on transport, status
    /// or decode failure.
    pub async fn generate_contract(&self, request: &ContractRequest) -> Result<Contract, ApiError> {
        request.validate()?;
        tracing::info!(
            platform = %request.platform,
            personas = request.persona_ids.len(),
            "generating contract"
        );
        let contract: Contract = self
            .post_json("/contracts/generate", request, "generated contract")
            .await?;
        tracing::info!(id = %contract.id, sections = contract.sections.len(), "contract generated");
        Ok(contract)
    }

    /// Delete a stored contract.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn delete_contract(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        self.delete_json(&format!("/contracts/{}", segment(id)?), "contract deletion")
            .await
    }

    /// Ask the service to export a stored contract.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failure.
    pub async fn export_contract(
        &self,
        id: &str,
        format: ExportFormat,
    ) -> Result<ContractExport, ApiError> {
        self.post_empty(
            &format!("/contracts/{}/export?format={format}", segment(id)?),
            "contract export",
        )
        .await
    }
}
