//! # Doc Indexer Repository
//!
//! This crate provides traits and implementations for writing documents to
//! the search index. It includes definitions for errors, interfaces, the
//! request signer, and a concrete signed-HTTP implementation for OpenSearch.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod signing;

pub use config::{IndexEndpoint, SigningScope};
pub use errors::PublishError;
pub use interfaces::{DocumentPublisher, RequestSigner};
pub use opensearch::OpenSearchPublisher;
pub use signing::SigV4Signer;
