//! Header derivation and user header edits.

use crate::document::JsonDocument;

/// Default headers: the first successfully parsed document's own key order.
///
/// Headers are never reordered by content; the sequence here is the
/// positional contract for every row produced from every document.
pub fn default_headers(documents: &[JsonDocument]) -> Vec<String> {
    documents
        .first()
        .map(|document| document.fields.keys().cloned().collect())
        .unwrap_or_default()
}

/// Tokenize a user's header edit: split on commas, trim, drop empties.
///
/// The order of the surviving tokens becomes the new header list verbatim;
/// duplicates are kept and remain positionally significant.
pub fn parse_header_edit(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
