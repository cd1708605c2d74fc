//! Document publisher trait definition.

use async_trait::async_trait;

use crate::errors::PublishError;
use doc_indexer_shared::SearchDocument;

/// Abstracts the search index write side.
///
/// Implementations are injected into the ingest orchestrator, which keeps
/// the pipeline testable with mock publishers that record calls instead of
/// performing network I/O.
#[async_trait]
pub trait DocumentPublisher: Send + Sync {
    /// Create or replace the document stored under the identifier derived
    /// from `key`.
    ///
    /// Repeated upserts with the same key address the same document, so
    /// re-delivered notifications overwrite rather than duplicate.
    ///
    /// # Arguments
    ///
    /// * `key` - The source object key the document was parsed from
    /// * `document` - The document to write
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index accepted the document
    /// * `Err(PublishError)` - If the request failed or was rejected
    async fn upsert(&self, key: &str, document: &SearchDocument) -> Result<(), PublishError>;
}
