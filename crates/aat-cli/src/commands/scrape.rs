use aat_client::ApiClient;
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ScrapeCommands;
use crate::output::{output, output_listing};

/// Handle `aat scrape`.
pub async fn handle(
    action: &ScrapeCommands,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ScrapeCommands::Reddit(args) => {
            let job = client
                .start_reddit_scrape(&args.persona, args.max_items)
                .await
                .context("failed to start Reddit scrape")?;
            output(&job, flags.format)
        }
        ScrapeCommands::Youtube(args) => {
            let job = client
                .start_youtube_scrape(&args.persona, args.max_items)
                .await
                .context("failed to start YouTube scrape")?;
            output(&job, flags.format)
        }
        ScrapeCommands::Jobs => {
            let jobs = client
                .list_scrape_jobs()
                .await
                .context("failed to list scrape jobs")?;
            output_listing(&jobs, &jobs.jobs, flags.format)
        }
        ScrapeCommands::Job { id } => {
            let job = client
                .get_scrape_job(id)
                .await
                .with_context(|| format!("failed to fetch scrape job '{id}'"))?;
            output(&job, flags.format)
        }
        ScrapeCommands::Cancel { id } => {
            let ack = client
                .cancel_scrape_job(id)
                .await
                .with_context(|| format!("failed to cancel scrape job '{id}'"))?;
            output(&ack, flags.format)
        }
    }
}
