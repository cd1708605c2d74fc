//! Search document structure.
//!
//! The document produced from one object's raw content and sent to the
//! search index.

use serde::{Deserialize, Serialize};

/// A parsed record ready for indexing.
///
/// Field names serialize in their original capitalized form, which is the
/// shape the index mapping expects. Every field defaults to an empty string
/// when the corresponding input line is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    /// First line of the record.
    #[serde(rename = "Title")]
    pub title: String,
    /// Second line of the record.
    #[serde(rename = "Author")]
    pub author: String,
    /// Third line of the record, free-text and unvalidated.
    #[serde(rename = "Date")]
    pub date: String,
    /// Remaining lines concatenated in order with no separator.
    #[serde(rename = "Body")]
    pub body: String,
    /// First body line verbatim, or empty when there is no body.
    #[serde(rename = "Summary")]
    pub summary: String,
}
