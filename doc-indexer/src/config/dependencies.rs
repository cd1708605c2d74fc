//! Dependency initialization and wiring for the document indexer.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use tracing::info;

use crate::IndexingError;
use doc_indexer_pipeline::{
    fetcher::S3ObjectStore, orchestrator::Orchestrator, processor::RecordProcessor,
};
use doc_indexer_repository::{IndexEndpoint, OpenSearchPublisher, SigV4Signer, SigningScope};

/// Default index name.
const DEFAULT_INDEX: &str = "documents";

/// Default document type segment of the index API path.
const DEFAULT_DOCTYPE: &str = "_doc";

/// Default signing service name for the search domain.
const DEFAULT_SIGNING_SERVICE: &str = "es";

/// Default bound on a single object fetch, in seconds.
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to handle events.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SEARCH_HOST`: Search domain base URL (required)
    /// - `SEARCH_INDEX`: Index name (default: documents)
    /// - `SEARCH_DOCTYPE`: Document type path segment (default: _doc)
    /// - `SIGNING_SERVICE`: Service name for request signing (default: es)
    /// - `SIGNING_REGION`: Region for request signing (default: the ambient
    ///   AWS region)
    /// - `FETCH_TIMEOUT_SECS`: Object fetch bound in seconds (default: 10)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If initialization fails
    pub async fn new() -> Result<Self, IndexingError> {
        let host = env::var("SEARCH_HOST")
            .map_err(|_| IndexingError::config("SEARCH_HOST must be set"))?;
        let index = env::var("SEARCH_INDEX").unwrap_or_else(|_| DEFAULT_INDEX.to_string());
        let doctype = env::var("SEARCH_DOCTYPE").unwrap_or_else(|_| DEFAULT_DOCTYPE.to_string());
        let service =
            env::var("SIGNING_SERVICE").unwrap_or_else(|_| DEFAULT_SIGNING_SERVICE.to_string());

        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        let region = match env::var("SIGNING_REGION") {
            Ok(region) => region,
            Err(_) => aws_config
                .region()
                .map(|r| r.as_ref().to_string())
                .ok_or_else(|| {
                    IndexingError::config(
                        "SIGNING_REGION must be set when no ambient region is configured",
                    )
                })?,
        };

        let fetch_timeout = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS);

        info!(
            host = %host,
            index = %index,
            doctype = %doctype,
            region = %region,
            service = %service,
            fetch_timeout_secs = fetch_timeout,
            "Initializing dependencies"
        );

        // Credentials are resolved once here and handed to the signer; the
        // publisher never touches the ambient credential chain itself.
        let credentials = aws_config
            .credentials_provider()
            .ok_or_else(|| IndexingError::config("No credentials provider available"))?
            .provide_credentials()
            .await
            .map_err(|e| IndexingError::config(format!("Failed to resolve credentials: {}", e)))?;

        let signer = SigV4Signer::new(credentials, SigningScope { region, service });

        let publisher =
            OpenSearchPublisher::new(IndexEndpoint::new(host, index, doctype), Arc::new(signer))?;

        let store = S3ObjectStore::with_timeout(
            aws_sdk_s3::Client::new(&aws_config),
            Duration::from_secs(fetch_timeout),
        );

        let orchestrator = Orchestrator::new(
            Arc::new(store),
            RecordProcessor::new(),
            Arc::new(publisher),
        );

        Ok(Self { orchestrator })
    }
}
