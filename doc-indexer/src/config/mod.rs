//! Configuration for the document indexer.

mod dependencies;

pub use dependencies::Dependencies;
