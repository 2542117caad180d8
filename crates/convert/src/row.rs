//! Row mapping: one document plus an ordered header list to one positional row.

use crate::document::JsonDocument;
use crate::normalize::{FieldValue, normalize};

/// Produce one positional row of normalized values for `document`.
///
/// Each header is looked up by exact name; a missing field yields the
/// empty string rather than an error. The row length always equals
/// `headers.len()`, so every encoder can treat its input as rectangular.
pub fn map_row(document: &JsonDocument, headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .map(|header| normalize(FieldValue::of(document.fields.get(header))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_documents;
    use crate::document::SourceFile;

    fn doc(body: &str) -> JsonDocument {
        let (mut documents, notices) =
            parse_documents(&[SourceFile::new("test.json", body.as_bytes().to_vec())]);
        assert!(notices.is_empty());
        documents.remove(0)
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_row_follows_header_order() {
        let document = doc(r#"{"b": "2", "a": "1"}"#);
        assert_eq!(map_row(&document, &headers(&["a", "b"])), ["1", "2"]);
    }

    #[test]
    fn test_missing_fields_yield_empty_cells() {
        let document = doc(r#"{"a": "1"}"#);
        assert_eq!(
            map_row(&document, &headers(&["a", "gone", "also_gone"])),
            ["1", "", ""]
        );
    }

    #[test]
    fn test_row_length_matches_headers_not_document() {
        let document = doc(r#"{"a": 1, "b": 2, "c": 3}"#);
        assert_eq!(map_row(&document, &headers(&["a"])).len(), 1);
        assert_eq!(map_row(&document, &headers(&[])).len(), 0);
        assert_eq!(map_row(&document, &headers(&["x", "y", "z", "w"])).len(), 4);
    }

    #[test]
    fn test_duplicate_headers_repeat_the_field() {
        let document = doc(r#"{"a": "1"}"#);
        assert_eq!(map_row(&document, &headers(&["a", "a"])), ["1", "1"]);
    }
}
