//! Publish error types.
//!
//! This module defines the error types that can occur while publishing a
//! document to the search index.

use thiserror::Error;

/// Errors that can occur while publishing a document.
///
/// Every variant is recoverable per item: the orchestrator logs the error,
/// records the skip, and continues with the rest of the batch.
#[derive(Error, Debug, Clone)]
pub enum PublishError {
    /// The endpoint configuration is not a usable URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The document could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The request could not be signed.
    #[error("Signing error: {0}")]
    SigningError(String),

    /// The network call could not be completed (timeout, DNS failure,
    /// connection refused).
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The index service answered with a non-success status.
    #[error("Index rejected document with status {status}: {body}")]
    Rejected {
        /// HTTP status code returned by the index.
        status: u16,
        /// Response body returned by the index.
        body: String,
    },
}

impl PublishError {
    /// Create an invalid endpoint error.
    pub fn invalid_endpoint(msg: impl Into<String>) -> Self {
        Self::InvalidEndpoint(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a signing error.
    pub fn signing(msg: impl Into<String>) -> Self {
        Self::SigningError(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create an index rejection error.
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }
}
