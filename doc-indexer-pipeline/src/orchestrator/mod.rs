//! Orchestrator module for the ingest pipeline.
//!
//! Coordinates the consumer, fetcher, processor, and publisher for one
//! event notification batch.

use std::sync::Arc;

use aws_lambda_events::event::s3::S3Event;
use tracing::{error, info, instrument};

use crate::consumer;
use crate::fetcher::ObjectStore;
use crate::processor::RecordProcessor;
use doc_indexer_repository::DocumentPublisher;
use doc_indexer_shared::{BatchReport, ItemReport, ItemStatus, ObjectRef};

/// Orchestrator that processes one notification batch.
///
/// Items are processed sequentially, one fetch-parse-publish sequence at a
/// time. A failed fetch or publish is logged and recorded in the report;
/// it never aborts the rest of the batch, and `handle_event` itself is
/// infallible.
pub struct Orchestrator {
    store: Arc<dyn ObjectStore>,
    processor: RecordProcessor,
    publisher: Arc<dyn DocumentPublisher>,
}

impl Orchestrator {
    /// Create a new orchestrator with the given components.
    pub fn new(
        store: Arc<dyn ObjectStore>,
        processor: RecordProcessor,
        publisher: Arc<dyn DocumentPublisher>,
    ) -> Self {
        Self {
            store,
            processor,
            publisher,
        }
    }

    /// Process every record in the event and report the outcome per item.
    #[instrument(skip(self, event), fields(record_count = event.records.len()))]
    pub async fn handle_event(&self, event: &S3Event) -> BatchReport {
        info!("Handler invoked");

        let objects = consumer::object_refs(event);

        let mut items = Vec::with_capacity(objects.len());
        let mut published = 0;
        let mut skipped = 0;

        for object in &objects {
            let status = self.process_object(object).await;
            match status {
                ItemStatus::Published => published += 1,
                ItemStatus::Skipped { .. } => skipped += 1,
            }
            items.push(ItemReport {
                bucket: object.bucket.clone(),
                key: object.key.clone(),
                status,
            });
        }

        info!(
            total = items.len(),
            published,
            skipped,
            "Batch complete"
        );

        BatchReport {
            total: items.len(),
            published,
            skipped,
            items,
        }
    }

    /// Fetch, parse, and publish a single object.
    async fn process_object(&self, object: &ObjectRef) -> ItemStatus {
        info!(bucket = %object.bucket, key = %object.key, "Fetching object");

        let content = match self.store.fetch(&object.bucket, &object.key).await {
            Ok(content) => content,
            Err(e) => {
                error!(
                    bucket = %object.bucket,
                    key = %object.key,
                    error = %e,
                    "Failed to fetch object"
                );
                return ItemStatus::skipped(format!("fetch: {}", e));
            }
        };

        let document = self.processor.process(&content);

        match self.publisher.upsert(&object.key, &document).await {
            Ok(()) => ItemStatus::Published,
            Err(e) => {
                error!(key = %object.key, error = %e, "Failed to publish document");
                ItemStatus::skipped(format!("publish: {}", e))
            }
        }
    }
}
