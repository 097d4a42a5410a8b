use std::time::Duration;

use thiserror::Error;

use crate::record::RecordKind;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("local storage quota exceeded writing {key} ({needed} of {limit} bytes)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("local storage error: {0}")]
    Local(String),

    #[error("remote store error: {0}")]
    Remote(String),

    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 DeleteObject error: {0}")]
    DeleteObject(String),

    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),
}

/// Outcome errors of the persistence gateway.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: RecordKind, key: String },

    /// Both the remote write and the local fallback failed.
    #[error("save failed (remote: {remote}; local: {local})")]
    Failed { remote: String, local: String },
}
