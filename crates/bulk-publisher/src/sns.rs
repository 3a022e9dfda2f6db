//! SNS implementation of [`MessagePublisher`].

use crate::client::{MessagePublisher, PublishResponse};
use crate::config::PublisherConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_sns::config::Region;
use aws_sdk_sns::operation::RequestId;

/// Shared SNS client for a whole run
///
/// Creating an SDK client resolves credentials and builds an HTTP stack, so
/// one instance is built up front and reused for every record.
pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    /// Create a new SNS client from the configured profile and region
    pub async fn new(config: &PublisherConfig) -> Result<Self> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(&config.credential_profile)
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        tracing::debug!(
            "Loaded AWS config (profile: {}, region: {})",
            config.credential_profile,
            config.region
        );

        Self::from_sdk_config(&sdk_config, config)
    }

    /// Build the client from already loaded AWS settings, applying the
    /// endpoint override if one is configured
    pub fn from_sdk_config(sdk_config: &SdkConfig, config: &PublisherConfig) -> Result<Self> {
        let mut builder = aws_sdk_sns::config::Builder::from(sdk_config);

        if let Some(endpoint_url) = &config.endpoint_url {
            if !(endpoint_url.starts_with("http://") || endpoint_url.starts_with("https://")) {
                anyhow::bail!("SNS endpoint URL must start with http:// or https://: {endpoint_url}");
            }
            tracing::info!("Using custom SNS endpoint: {endpoint_url}");
            builder = builder.endpoint_url(endpoint_url);
        }

        let client = aws_sdk_sns::Client::from_conf(builder.build());
        Ok(Self { client })
    }
}

#[async_trait]
impl MessagePublisher for SnsPublisher {
    async fn publish(&self, topic: &str, body: &str) -> Result<PublishResponse> {
        let output = self
            .client
            .publish()
            .topic_arn(topic)
            .message(body)
            .send()
            .await
            .with_context(|| format!("Failed to publish message to SNS topic {topic}"))?;

        Ok(PublishResponse {
            message_id: output.message_id().map(str::to_string),
            sequence_number: output.sequence_number().map(str::to_string),
            request_id: output.request_id().map(str::to_string),
            raw: Some(format!("{output:?}")),
        })
    }
}
