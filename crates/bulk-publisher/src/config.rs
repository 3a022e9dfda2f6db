//! Publisher configuration.

use std::path::PathBuf;

/// AWS credential profile used when none is given.
pub const DEFAULT_CREDENTIAL_PROFILE: &str = "CHANGEME";

/// AWS region used when none is given.
pub const DEFAULT_REGION: &str = "eu-west-1";

/// Topic receiving the customer-created notifications.
pub const DEFAULT_TOPIC_ARN: &str = "arn:aws:sns:eu-west-1:000000000000:CHANGEME-customer-created";

/// Input file shipped next to this crate's sources.
pub const DEFAULT_INPUT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/sample.json");

/// Configuration for a bulk publish run.
///
/// Everything the run needs is carried here and handed to
/// [`BulkPublisher::new`](crate::BulkPublisher::new); nothing is read from
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherConfig {
    /// Named AWS profile the SDK resolves credentials from.
    pub credential_profile: String,

    /// AWS region of the topic.
    pub region: String,

    /// ARN of the topic every record is published to.
    pub topic_arn: String,

    /// JSON file holding the array of records.
    pub input_path: PathBuf,

    /// Service endpoint override, e.g. `http://localhost:4566` for LocalStack.
    ///
    /// If `None`, the SDK's regional endpoint is used.
    pub endpoint_url: Option<String>,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            credential_profile: DEFAULT_CREDENTIAL_PROFILE.to_string(),
            region: DEFAULT_REGION.to_string(),
            topic_arn: DEFAULT_TOPIC_ARN.to_string(),
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            endpoint_url: None,
        }
    }
}

impl PublisherConfig {
    /// Create a config with the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read records from a different file.
    pub fn with_input_path(mut self, input_path: impl Into<PathBuf>) -> Self {
        self.input_path = input_path.into();
        self
    }

    /// Publish to a different topic.
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = topic_arn.into();
        self
    }

    /// Send requests to a custom service endpoint.
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }
}
