//! Bulk publishing of JSON records to an SNS topic.
//!
//! This crate loads a JSON array from a local file and publishes every element,
//! re-serialized as JSON, as one message to a single SNS topic. Records are sent
//! strictly one at a time, in file order, and the first failure ends the run.
//!
//! # Architecture
//!
//! ```text
//!   input file (JSON array)
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   record.rs     │  load_records: read + parse, top level must be an array
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐        ┌──────────────────────────────┐
//! │  publisher.rs   │──────▶ │ MessagePublisher (client.rs) │
//! │  BulkPublisher  │        │  - SnsPublisher  (sns.rs)    │
//! │  progress/out   │        │  - DryRunPublisher           │
//! └─────────────────┘        └──────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use bulk_publisher::{BulkPublisher, PublisherConfig, SnsPublisher};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = PublisherConfig::default();
//!     let client = SnsPublisher::new(&config).await?;
//!
//!     let publisher = BulkPublisher::new(config, client);
//!     let summary = publisher.run(&mut std::io::stdout()).await?;
//!     println!("Published {} messages", summary.messages_published);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod publisher;
mod record;
mod sns;


pub use client::{DryRunPublisher, MessagePublisher, PublishResponse};
pub use config::{
    PublisherConfig, DEFAULT_CREDENTIAL_PROFILE, DEFAULT_INPUT_PATH, DEFAULT_REGION,
    DEFAULT_TOPIC_ARN,
};
pub use error::PublishError;
pub use publisher::{BulkPublisher, PublishSummary};
pub use record::{load_records, record_id, Record};
pub use sns::SnsPublisher;
