//! OpenSearch implementation of the document publisher.

mod client;
mod document_id;

pub use client::OpenSearchPublisher;
pub use document_id::document_id;
