//! Command-line interface for sns-bulk-publish
//!
//! Running with no arguments publishes the bundled `sample.json` to the
//! built-in topic. See the library docs for the available overrides.

use anyhow::Context;
use bulk_publisher::{BulkPublisher, DryRunPublisher, PublisherConfig, SnsPublisher};
use clap::Parser;
use sns_bulk_publish::PublishOpts;

#[derive(Parser)]
#[command(name = "sns-bulk-publish")]
#[command(about = "Publish each record of a JSON array file as a message to an SNS topic")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: PublishOpts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PublisherConfig::from(&cli.opts);
    let mut stdout = std::io::stdout();

    let result = if cli.opts.dry_run {
        tracing::info!("Dry run: nothing will be published");
        BulkPublisher::new(config, DryRunPublisher::new())
            .run(&mut stdout)
            .await
    } else {
        let client = SnsPublisher::new(&config)
            .await
            .context("Failed to create SNS client")?;
        BulkPublisher::new(config, client).run(&mut stdout).await
    };
    let summary = result.context("Bulk publish failed")?;

    tracing::info!("Published {} messages", summary.messages_published);
    Ok(())
}
