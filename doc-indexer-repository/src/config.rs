//! Configuration types for the search index write side.
//!
//! Both values are fixed at deployment and constructed once at process
//! start.

/// Destination address of the search index.
#[derive(Debug, Clone)]
pub struct IndexEndpoint {
    /// Base URL of the search domain, e.g. `https://search.example.com`.
    pub host: String,
    /// Index name, the first path segment under the host.
    pub index: String,
    /// Document type segment, e.g. `_doc`.
    pub doctype: String,
}

impl IndexEndpoint {
    /// Create a new endpoint description.
    pub fn new(
        host: impl Into<String>,
        index: impl Into<String>,
        doctype: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            index: index.into(),
            doctype: doctype.into(),
        }
    }
}

/// Scope a request signature is derived for.
#[derive(Debug, Clone)]
pub struct SigningScope {
    /// Region identifier, e.g. `us-east-1`.
    pub region: String,
    /// Target service name, e.g. `es`.
    pub service: String,
}
