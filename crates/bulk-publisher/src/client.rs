//! The messaging boundary used by [`BulkPublisher`](crate::BulkPublisher).

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Acknowledgement returned by a publish call.
///
/// Printed after each record; the publisher never inspects it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishResponse {
    /// Service-assigned message id.
    pub message_id: Option<String>,
    /// Sequence number, only set for FIFO topics.
    pub sequence_number: Option<String>,
    /// Request id from the response metadata.
    pub request_id: Option<String>,
    /// Debug dump of the client's own output type, printed verbatim when set.
    pub raw: Option<String>,
}

impl fmt::Display for PublishResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(raw) = &self.raw {
            return f.write_str(raw);
        }
        write!(
            f,
            "{{MessageId: {}",
            self.message_id.as_deref().unwrap_or("None")
        )?;
        if let Some(seq) = &self.sequence_number {
            write!(f, ", SequenceNumber: {seq}")?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, ", ResponseMetadata: {{RequestId: {request_id}}}")?;
        }
        write!(f, "}}")
    }
}

/// Anything that can deliver one message body to a topic.
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    /// Publish `body` to `topic` and wait for the service's answer.
    async fn publish(&self, topic: &str, body: &str) -> Result<PublishResponse>;
}

/// Publisher that sends nothing and answers with a synthetic message id.
///
/// Used for `--dry-run` to walk the input without touching AWS.
#[derive(Debug, Default)]
pub struct DryRunPublisher {
    sent: AtomicU64,
}

impl DryRunPublisher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessagePublisher for DryRunPublisher {
    async fn publish(&self, topic: &str, body: &str) -> Result<PublishResponse> {
        let n = self.sent.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!("Dry run: skipping publish of {} bytes to {topic}", body.len());
        Ok(PublishResponse {
            message_id: Some(format!("dry-run-{n}")),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_display() {
        let response = PublishResponse {
            message_id: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(response.to_string(), "{MessageId: abc}");

        let fifo = PublishResponse {
            message_id: Some("abc".to_string()),
            sequence_number: Some("10000000000000000001".to_string()),
            request_id: Some("req-1".to_string()),
            raw: None,
        };
        assert_eq!(
            fifo.to_string(),
            "{MessageId: abc, SequenceNumber: 10000000000000000001, ResponseMetadata: {RequestId: req-1}}"
        );
    }

    #[test]
    fn test_response_display_prefers_raw_dump() {
        let response = PublishResponse {
            message_id: Some("abc".to_string()),
            request_id: Some("req-1".to_string()),
            raw: Some("PublishOutput { message_id: Some(\"abc\"), _request_id: Some(\"req-1\") }".to_string()),
            ..Default::default()
        };
        assert_eq!(
            response.to_string(),
            "PublishOutput { message_id: Some(\"abc\"), _request_id: Some(\"req-1\") }"
        );
    }

    #[test]
    fn test_dry_run_numbers_messages() {
        let publisher = DryRunPublisher::new();
        let first = tokio_test::block_on(publisher.publish("topic", "{}")).unwrap();
        let second = tokio_test::block_on(publisher.publish("topic", "{}")).unwrap();
        assert_eq!(first.message_id.as_deref(), Some("dry-run-1"));
        assert_eq!(second.message_id.as_deref(), Some("dry-run-2"));
    }
}
