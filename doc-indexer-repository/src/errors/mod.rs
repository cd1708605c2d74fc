//! Error types for the document indexer repository.

mod publish_error;

pub use publish_error::PublishError;
