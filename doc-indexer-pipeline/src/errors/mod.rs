//! Error types for the ingest pipeline.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while retrieving an object from the bucket.
///
/// Every variant is recoverable per item: the orchestrator logs the error,
/// records the skip, and continues with the rest of the batch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The object does not exist.
    #[error("Object not found: s3://{bucket}/{key}")]
    NotFound {
        /// The source container identifier.
        bucket: String,
        /// The object key.
        key: String,
    },

    /// Access to the object was denied.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The fetch did not complete within the configured bound.
    #[error("Fetch timed out after {0:?}")]
    Timeout(Duration),

    /// The underlying transport failed.
    #[error("Transport error: {0}")]
    TransportError(String),
}

impl FetchError {
    /// Create a not-found error.
    pub fn not_found(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Create an access-denied error.
    pub fn access_denied(msg: impl Into<String>) -> Self {
        Self::AccessDenied(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }
}
