//! # Doc Indexer Shared
//!
//! Shared types and data structures for the document indexer system.

pub mod document;
pub mod object_ref;
pub mod report;

pub use document::SearchDocument;
pub use object_ref::ObjectRef;
pub use report::{BatchReport, ItemReport, ItemStatus};
