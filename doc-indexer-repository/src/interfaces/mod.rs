//! Interface definitions for the search index write side.
//!
//! These traits allow dependency injection and swappable implementations:
//! the orchestrator only sees `DocumentPublisher`, and the publisher only
//! sees `RequestSigner`.

mod document_publisher;
mod request_signer;

pub use document_publisher::DocumentPublisher;
pub use request_signer::RequestSigner;
