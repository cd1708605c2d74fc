//! Signed OpenSearch publisher implementation.
//!
//! Upserts documents through the index's HTTP API. Requests are signed by
//! the injected signer and bounded by a fixed client timeout.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::config::IndexEndpoint;
use crate::errors::PublishError;
use crate::interfaces::{DocumentPublisher, RequestSigner};
use crate::opensearch::document_id::document_id;
use doc_indexer_shared::SearchDocument;

/// How long a publish request may go without a response before it fails.
const PUBLISH_TIMEOUT: Duration = Duration::from_secs(10);

/// OpenSearch publisher.
///
/// The HTTP client and the signer are built once and reused read-only
/// across items.
pub struct OpenSearchPublisher {
    http: reqwest::Client,
    signer: Arc<dyn RequestSigner>,
    endpoint: IndexEndpoint,
}

impl OpenSearchPublisher {
    /// Create a new publisher for the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Destination host, index name, and doctype segment
    /// * `signer` - Signer applied to every outgoing request
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchPublisher)` - A new publisher instance
    /// * `Err(PublishError)` - If the host is not a valid URL or the HTTP
    ///   client cannot be built
    pub fn new(
        endpoint: IndexEndpoint,
        signer: Arc<dyn RequestSigner>,
    ) -> Result<Self, PublishError> {
        Url::parse(&endpoint.host)
            .map_err(|e| PublishError::invalid_endpoint(format!("{}: {}", endpoint.host, e)))?;

        let http = reqwest::Client::builder()
            .timeout(PUBLISH_TIMEOUT)
            .build()
            .map_err(|e| PublishError::transport(e.to_string()))?;

        info!(
            host = %endpoint.host,
            index = %endpoint.index,
            doctype = %endpoint.doctype,
            "Created OpenSearch publisher"
        );

        Ok(Self {
            http,
            signer,
            endpoint,
        })
    }

    /// Destination URL for the document stored under `key`.
    fn document_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.endpoint.host.trim_end_matches('/'),
            self.endpoint.index,
            self.endpoint.doctype,
            document_id(key)
        )
    }
}

#[async_trait]
impl DocumentPublisher for OpenSearchPublisher {
    /// Upsert a document at its key-derived identifier.
    ///
    /// The write is a create-or-replace: publishing the same key twice
    /// overwrites the earlier document instead of duplicating it.
    #[instrument(skip(self, document), fields(key = %key))]
    async fn upsert(&self, key: &str, document: &SearchDocument) -> Result<(), PublishError> {
        let body = serde_json::to_vec(document)
            .map_err(|e| PublishError::serialization(e.to_string()))?;

        let url = self.document_url(key);

        let mut request = http::Request::builder()
            .method(http::Method::PUT)
            .uri(url.as_str())
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|e| PublishError::invalid_endpoint(e.to_string()))?;

        self.signer.sign(&mut request)?;

        let request = reqwest::Request::try_from(request)
            .map_err(|e| PublishError::invalid_endpoint(e.to_string()))?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| PublishError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index rejected document");
            return Err(PublishError::rejected(status.as_u16(), error_body));
        }

        debug!(url = %url, status = %status, "Document upserted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopSigner;

    impl RequestSigner for NoopSigner {
        fn sign(&self, _request: &mut http::Request<Vec<u8>>) -> Result<(), PublishError> {
            Ok(())
        }
    }

    fn publisher(host: &str) -> OpenSearchPublisher {
        let endpoint = IndexEndpoint::new(host, "documents", "_doc");
        OpenSearchPublisher::new(endpoint, Arc::new(NoopSigner)).unwrap()
    }

    #[test]
    fn document_url_composes_all_segments() {
        let publisher = publisher("https://search.example.com");

        assert_eq!(
            publisher.document_url("notes.txt"),
            "https://search.example.com/documents/_doc/notes.txt"
        );
    }

    #[test]
    fn document_url_escapes_the_key() {
        let publisher = publisher("https://search.example.com");

        assert_eq!(
            publisher.document_url("folder/file one.txt"),
            "https://search.example.com/documents/_doc/folder%2Ffile%20one.txt"
        );
    }

    #[test]
    fn document_url_tolerates_trailing_slash_on_host() {
        let publisher = publisher("https://search.example.com/");

        assert_eq!(
            publisher.document_url("a.txt"),
            "https://search.example.com/documents/_doc/a.txt"
        );
    }

    #[test]
    fn same_key_always_addresses_the_same_document() {
        let publisher = publisher("https://search.example.com");

        assert_eq!(
            publisher.document_url("reports/q1.txt"),
            publisher.document_url("reports/q1.txt")
        );
    }

    #[test]
    fn rejects_invalid_host() {
        let endpoint = IndexEndpoint::new("not a url", "documents", "_doc");
        let result = OpenSearchPublisher::new(endpoint, Arc::new(NoopSigner));

        assert!(matches!(result, Err(PublishError::InvalidEndpoint(_))));
    }
}
