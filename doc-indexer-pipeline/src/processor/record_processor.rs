//! Record processor implementation.
//!
//! Transforms raw object bytes into `SearchDocument` structures.

use tracing::debug;

use doc_indexer_shared::SearchDocument;

/// Parses line-oriented plaintext records.
///
/// The format is fixed-position: line 0 is the title, line 1 the author,
/// line 2 the date, and every remaining line belongs to the body. Parsing
/// is total over all byte inputs: short, empty, or malformed content
/// produces a document with empty fields instead of an error.
pub struct RecordProcessor {
    // Could hold format configuration in the future
}

impl RecordProcessor {
    /// Create a new record processor.
    pub fn new() -> Self {
        Self {}
    }

    /// Parse one object's raw content.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected. Lines are
    /// split on `\n`; trailing line-ending characters are not part of line
    /// content. Body lines are concatenated with no separator, so the
    /// original line breaks are not reinserted.
    pub fn process(&self, content: &[u8]) -> SearchDocument {
        let text = String::from_utf8_lossy(content);
        let mut lines = text.lines();

        let title = lines.next().unwrap_or_default().to_string();
        let author = lines.next().unwrap_or_default().to_string();
        let date = lines.next().unwrap_or_default().to_string();

        let body_lines: Vec<&str> = lines.collect();
        let summary = body_lines.first().copied().unwrap_or_default().to_string();

        debug!(
            title = %title,
            body_lines = body_lines.len(),
            "Parsed record"
        );

        SearchDocument {
            title,
            author,
            date,
            body: body_lines.concat(),
            summary,
        }
    }
}

impl Default for RecordProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_record() {
        let processor = RecordProcessor::new();

        let document = processor.process(b"T\nA\n2024-01-01\nline1\nline2");

        assert_eq!(document.title, "T");
        assert_eq!(document.author, "A");
        assert_eq!(document.date, "2024-01-01");
        assert_eq!(document.body, "line1line2");
        assert_eq!(document.summary, "line1");
    }

    #[test]
    fn short_input_defaults_missing_fields_to_empty() {
        let processor = RecordProcessor::new();

        let document = processor.process(b"Only title\nOnly author");

        assert_eq!(document.title, "Only title");
        assert_eq!(document.author, "Only author");
        assert_eq!(document.date, "");
        assert_eq!(document.body, "");
        assert_eq!(document.summary, "");
    }

    #[test]
    fn empty_input_yields_an_all_empty_document() {
        let processor = RecordProcessor::new();

        assert_eq!(processor.process(b""), SearchDocument::default());
    }

    #[test]
    fn body_is_concatenated_without_separators() {
        let processor = RecordProcessor::new();

        let document = processor.process(b"T\nA\nD\none\ntwo\nthree");

        assert_eq!(document.body, "onetwothree");
        assert_eq!(document.summary, "one");
    }

    #[test]
    fn embedded_whitespace_in_body_lines_is_preserved() {
        let processor = RecordProcessor::new();

        let document = processor.process(b"T\nA\nD\n  spaced  \ntail");

        assert_eq!(document.body, "  spaced  tail");
        assert_eq!(document.summary, "  spaced  ");
    }

    #[test]
    fn trailing_newline_is_not_part_of_content() {
        let processor = RecordProcessor::new();

        let document = processor.process(b"T\nA\nD\nbody\n");

        assert_eq!(document.title, "T");
        assert_eq!(document.body, "body");
    }

    #[test]
    fn carriage_returns_are_stripped_from_line_ends() {
        let processor = RecordProcessor::new();

        let document = processor.process(b"T\r\nA\r\nD\r\nbody\r\n");

        assert_eq!(document.title, "T");
        assert_eq!(document.author, "A");
        assert_eq!(document.date, "D");
        assert_eq!(document.body, "body");
    }

    #[test]
    fn invalid_utf8_is_replaced_instead_of_failing() {
        let processor = RecordProcessor::new();

        let document = processor.process(b"T\xff\nA\nD\nbody");

        assert_eq!(document.title, "T\u{fffd}");
        assert_eq!(document.author, "A");
        assert_eq!(document.body, "body");
    }

    #[test]
    fn date_is_carried_as_free_text() {
        let processor = RecordProcessor::new();

        let document = processor.process(b"T\nA\nnot a date at all\nbody");

        assert_eq!(document.date, "not a date at all");
    }
}
