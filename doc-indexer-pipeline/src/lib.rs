//! # Doc Indexer Pipeline
//!
//! This crate provides the pipeline components for turning bucket
//! notifications into indexed documents.
//!
//! ## Architecture
//!
//! The pipeline follows the Consumer-Fetcher-Processor pattern, loaded
//! through the repository crate's publisher:
//!
//! 1. **Consumer**: Extracts object references from the event notification
//! 2. **Fetcher**: Retrieves raw object content from the bucket
//! 3. **Processor**: Parses raw content into a search document
//! 4. **Orchestrator**: Runs fetch, parse, publish per object with
//!    per-item error isolation

pub mod consumer;
pub mod errors;
pub mod fetcher;
pub mod orchestrator;
pub mod processor;

pub use errors::FetchError;
