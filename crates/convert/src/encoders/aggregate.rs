//! Aggregated-JSON encoder.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::document::JsonDocument;
use crate::error::Result;

/// Serialize the ordered list of parsed documents as a single JSON array,
/// pretty-printed with a 4-space indent, UTF-8 encoded.
///
/// Header customization does not apply here; field names and order are
/// taken from the documents as parsed. An empty list yields `[]`.
pub fn encode_aggregate(documents: &[JsonDocument]) -> Result<Vec<u8>> {
    let values: Vec<_> = documents.iter().map(|document| &document.fields).collect();

    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    values.serialize(&mut serializer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{SourceFile, parse_documents};
    use serde_json::{Value, json};

    #[test]
    fn test_reparses_to_same_documents_in_order() {
        let files = vec![
            SourceFile::new("a.json", br#"{"a":1,"b":"x"}"#.to_vec()),
            SourceFile::new("b.json", br#"{"a":2,"b":"y"}"#.to_vec()),
        ];
        let (documents, _) = parse_documents(&files);
        let bytes = encode_aggregate(&documents).unwrap();

        let reparsed: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(reparsed, json!([{"a":1,"b":"x"},{"a":2,"b":"y"}]));
    }

    #[test]
    fn test_four_space_indent() {
        let (documents, _) = parse_documents(&[SourceFile::new(
            "a.json",
            br#"{"key":"value"}"#.to_vec(),
        )]);
        let text = String::from_utf8(encode_aggregate(&documents).unwrap()).unwrap();
        assert_eq!(text, "[\n    {\n        \"key\": \"value\"\n    }\n]");
    }

    #[test]
    fn test_empty_list_is_empty_array() {
        let bytes = encode_aggregate(&[]).unwrap();
        assert_eq!(bytes, b"[]");
    }
}
