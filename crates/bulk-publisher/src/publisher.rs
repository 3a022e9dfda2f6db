//! Bulk publisher.
//!
//! This module provides the BulkPublisher which loads the records from the
//! configured input file and publishes each one to the configured topic.

use crate::client::MessagePublisher;
use crate::config::PublisherConfig;
use crate::error::PublishError;
use crate::record::{load_records, record_id};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of a completed run.
#[derive(Debug, Clone, Default)]
pub struct PublishSummary {
    /// Number of messages published.
    pub messages_published: u64,
    /// Total time taken, including loading the input.
    pub total_duration: Duration,
}

impl PublishSummary {
    /// Calculate messages per second.
    pub fn messages_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.messages_published as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Publishes every record of a JSON array file to one topic.
///
/// Records go out one at a time in file order. Each publish call completes
/// before the next record is touched, and the first error ends the run
/// without publishing anything further.
///
/// # Example
///
/// ```ignore
/// let config = PublisherConfig::default().with_input_path("customers.json");
/// let client = SnsPublisher::new(&config).await?;
/// let publisher = BulkPublisher::new(config, client);
/// publisher.run(&mut std::io::stdout()).await?;
/// ```
pub struct BulkPublisher<P> {
    config: PublisherConfig,
    client: P,
}

impl<P: MessagePublisher> BulkPublisher<P> {
    /// Create a new bulk publisher around a messaging client.
    pub fn new(config: PublisherConfig, client: P) -> Self {
        Self { config, client }
    }

    /// Get a reference to the messaging client.
    pub fn client(&self) -> &P {
        &self.client
    }

    /// Load the input file and publish every record.
    ///
    /// For each record a progress line is written to `out` before the publish
    /// call and the service's response after it.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<PublishSummary, PublishError> {
        let start_time = Instant::now();
        let records = load_records(&self.config.input_path)?;
        let total = records.len();

        info!(
            "Publishing {} records from {} to '{}'",
            total,
            self.config.input_path.display(),
            self.config.topic_arn
        );

        let mut summary = PublishSummary::default();

        for (offset, record) in records.iter().enumerate() {
            let counter = offset + 1;
            let id = record_id(record).ok_or(PublishError::MissingId { index: counter })?;

            writeln!(out, "Enqueuing message {id} - ({counter}/{total}):")?;

            let body = record.to_string();
            debug!("Record {counter}: {} byte body", body.len());

            let response = self
                .client
                .publish(&self.config.topic_arn, &body)
                .await
                .map_err(|e| PublishError::Publish {
                    index: counter,
                    id,
                    source: e.into(),
                })?;

            writeln!(out, "{response}")?;
            summary.messages_published += 1;
        }

        out.flush()?;
        summary.total_duration = start_time.elapsed();

        info!(
            "Publishing complete: {} messages in {:?} ({:.2} msg/sec)",
            summary.messages_published,
            summary.total_duration,
            summary.messages_per_second()
        );

        Ok(summary)
    }
}
