//! Loading records from the input file.

use crate::error::PublishError;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// One element of the input array, kept exactly as read.
pub type Record = Value;

/// Read `path` and return the elements of its top-level JSON array, in order.
///
/// The whole file is read into memory before parsing. Element shapes are not
/// checked.
pub fn load_records(path: &Path) -> Result<Vec<Record>, PublishError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PublishError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|source| PublishError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(records) => {
            debug!("Loaded {} records from {}", records.len(), path.display());
            Ok(records)
        }
        _ => Err(PublishError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Display form of a record's `id` field.
///
/// Strings are shown without quotes, other values as JSON. Returns `None` for
/// records that are not objects or lack `id`.
pub fn record_id(record: &Record) -> Option<String> {
    match record.get("id")? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
