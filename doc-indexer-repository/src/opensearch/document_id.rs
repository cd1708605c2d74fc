//! Document identifier derivation.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes replaced by a `%XX` escape in a document identifier: everything
/// except ASCII alphanumerics and `- _ . ~`.
const IDENTIFIER_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Derive the index document identifier for an object key.
///
/// The mapping is deterministic and injective: the same key always yields
/// the same identifier, and distinct keys cannot collide because every
/// reserved byte maps to its own escape. The result is always safe to embed
/// as a single URL path segment, so keys containing spaces, slashes, or
/// query characters address the index without ambiguity.
pub fn document_id(key: &str) -> String {
    utf8_percent_encode(key, IDENTIFIER_ENCODE_SET).to_string()
}
