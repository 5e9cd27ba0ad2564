use aat_client::ApiClient;
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `aat health`.
pub async fn handle(client: &ApiClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let health = client
        .health_check()
        .await
        .with_context(|| format!("health check against {} failed", client.base_url()))?;
    if !health.is_healthy() {
        tracing::warn!(status = %health.status, "service reports a degraded state");
    }
    output(&health, flags.format)
}
