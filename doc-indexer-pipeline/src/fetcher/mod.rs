//! Fetcher module: retrieves raw object content from the bucket.

mod s3;

use async_trait::async_trait;

use crate::errors::FetchError;

pub use s3::S3ObjectStore;

/// Abstracts read access to the object storage backend.
///
/// Implementations are injected into the orchestrator to enable testing
/// with mock stores.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Retrieve the full byte content of the named object.
    ///
    /// # Arguments
    ///
    /// * `bucket` - The source container identifier
    /// * `key` - The object key
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - The raw object bytes, with no guarantee on encoding
    /// * `Err(FetchError)` - If the object is missing, access is denied, or
    ///   the transport fails
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, FetchError>;
}
