//! SNS bulk publish
//!
//! Publishes every record of a JSON array file to an SNS topic, one message per
//! record, in file order.
//!
//! # CLI Usage
//!
//! ```bash
//! # Publish the bundled sample.json with the built-in profile and topic
//! sns-bulk-publish
//!
//! # Publish another file to another topic
//! sns-bulk-publish --input customers.json \
//!   --profile staging --region eu-west-1 \
//!   --topic-arn arn:aws:sns:eu-west-1:123456789012:customer-created
//!
//! # Publish to LocalStack
//! sns-bulk-publish --endpoint-url http://localhost:4566
//!
//! # Walk the input without sending anything
//! sns-bulk-publish --dry-run
//! ```

use bulk_publisher::{
    PublisherConfig, DEFAULT_CREDENTIAL_PROFILE, DEFAULT_INPUT_PATH, DEFAULT_REGION,
    DEFAULT_TOPIC_ARN,
};
use clap::Parser;
use std::path::PathBuf;

pub use bulk_publisher;

#[derive(Parser, Clone, Debug)]
pub struct PublishOpts {
    /// AWS credential profile
    #[arg(long, default_value = DEFAULT_CREDENTIAL_PROFILE, env = "AWS_PROFILE")]
    pub profile: String,

    /// AWS region of the topic
    #[arg(long, default_value = DEFAULT_REGION, env = "AWS_REGION")]
    pub region: String,

    /// ARN of the topic to publish to
    #[arg(long, default_value = DEFAULT_TOPIC_ARN, env = "SNS_TOPIC_ARN")]
    pub topic_arn: String,

    /// JSON file containing an array of records
    #[arg(long, default_value = DEFAULT_INPUT_PATH, env = "PUBLISH_INPUT")]
    pub input: PathBuf,

    /// SNS endpoint override (e.g. http://localhost:4566 for LocalStack)
    #[arg(long, env = "SNS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Dry run mode - print progress but don't publish anything
    #[arg(long)]
    pub dry_run: bool,
}

// CLI type → publisher library type conversion
impl From<&PublishOpts> for PublisherConfig {
    fn from(opts: &PublishOpts) -> Self {
        Self {
            credential_profile: opts.profile.clone(),
            region: opts.region.clone(),
            topic_arn: opts.topic_arn.clone(),
            input_path: opts.input.clone(),
            endpoint_url: opts.endpoint_url.clone(),
        }
    }
}
