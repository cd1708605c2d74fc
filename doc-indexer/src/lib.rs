//! # Doc Indexer
//!
//! Main library for the bucket-to-search-index document ingestor.
//!
//! This crate provides the Lambda entry point, configuration, and
//! dependency wiring for running the ingest pipeline.

pub mod config;
pub mod handler;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during indexer initialization.
///
/// Item-level runtime failures never surface here; the orchestrator
/// isolates them per notification.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Publisher setup error.
    #[error("Publish error: {0}")]
    PublishError(#[from] doc_indexer_repository::PublishError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
