//! Error types for the bulk publisher.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a bulk publish run.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Failed to read input file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Top-level JSON value in {path} is not an array")]
    NotAnArray { path: PathBuf },

    #[error("Record {index} has no `id` field")]
    MissingId { index: usize },

    #[error("Failed to publish record {index} (id {id})")]
    Publish {
        index: usize,
        id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to write progress output: {0}")]
    Output(#[from] std::io::Error),
}
