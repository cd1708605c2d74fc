//! Per-batch processing report types.
//!
//! The orchestrator records an explicit outcome for every notification in
//! the batch instead of suppressing item failures silently. The report is
//! an observability and testing surface; item failures never change the
//! invocation's fixed success response.

/// Outcome of processing a single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// The document was upserted into the search index.
    Published,
    /// The notification was skipped; the reason names the failing stage.
    Skipped {
        /// Why the item was skipped.
        reason: String,
    },
}

impl ItemStatus {
    /// Create a skipped status with the given reason.
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    /// Whether the item was published.
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

/// Outcome of processing a single notification, with its source location.
#[derive(Debug, Clone)]
pub struct ItemReport {
    /// The source container identifier.
    pub bucket: String,
    /// The object key.
    pub key: String,
    /// What happened to this item.
    pub status: ItemStatus,
}

/// Summary of one processed batch containing aggregate counts and
/// individual results.
///
/// One bad item never blocks the rest of the batch, so `published` plus
/// `skipped` always equals `total`.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Number of items in the batch.
    pub total: usize,
    /// Number of documents upserted.
    pub published: usize,
    /// Number of items skipped.
    pub skipped: usize,
    /// Individual results, in batch order.
    pub items: Vec<ItemReport>,
}
