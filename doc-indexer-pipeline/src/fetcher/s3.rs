//! S3 implementation of the object store.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::error::SdkError;
use tracing::debug;

use crate::errors::FetchError;
use crate::fetcher::ObjectStore;

/// Default bound on a single object fetch.
const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only object store backed by S3.
///
/// The client is built once and reused across items. Fetches are bounded
/// by a timeout so a stalled read cannot hang the batch.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    timeout: Duration,
}

impl S3ObjectStore {
    /// Create a store with the default fetch timeout.
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self {
            client,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Create a store with a custom fetch timeout.
    pub fn with_timeout(client: aws_sdk_s3::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, FetchError> {
        let request = self.client.get_object().bucket(bucket).key(key).send();

        let output = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))?
            .map_err(|e| match e {
                SdkError::ServiceError(ref service_err) => {
                    if service_err.err().is_no_such_key() {
                        FetchError::not_found(bucket, key)
                    } else if service_err.raw().status().as_u16() == 403 {
                        FetchError::access_denied(service_err.err().to_string())
                    } else {
                        FetchError::transport(service_err.err().to_string())
                    }
                }
                other => FetchError::transport(other.to_string()),
            })?;

        let bytes = tokio::time::timeout(self.timeout, output.body.collect())
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))?
            .map_err(|e| FetchError::transport(e.to_string()))?
            .into_bytes();

        debug!(bucket = %bucket, key = %key, size = bytes.len(), "Fetched object");
        Ok(bytes.to_vec())
    }
}
