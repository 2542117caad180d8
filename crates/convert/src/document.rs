//! Uploaded files and their parsed JSON documents.

use serde_json::{Map, Value};

use crate::notice::ExportNotice;

/// One uploaded file as received from the boundary.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// One successfully parsed top-level JSON object.
///
/// `fields` iterates in the document's own key order (`serde_json` is
/// built with `preserve_order`), which drives default-header derivation
/// and spreadsheet column inference.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument {
    pub filename: String,
    pub fields: Map<String, Value>,
}

/// Parse each uploaded file into a [`JsonDocument`].
///
/// A file whose bytes are not valid JSON, or whose top level is not an
/// object, is skipped with a per-file notice; the remaining documents are
/// returned in upload order.
pub fn parse_documents(files: &[SourceFile]) -> (Vec<JsonDocument>, Vec<ExportNotice>) {
    let mut documents = Vec::new();
    let mut notices = Vec::new();

    for file in files {
        match serde_json::from_slice::<Value>(&file.bytes) {
            Ok(Value::Object(fields)) => {
                tracing::debug!(file = %file.name, keys = fields.len(), "parsed upload");
                documents.push(JsonDocument {
                    filename: file.name.clone(),
                    fields,
                });
            }
            Ok(other) => {
                notices.push(ExportNotice::Parse {
                    filename: file.name.clone(),
                    detail: format!(
                        "expected a top-level JSON object, found {}",
                        json_type_name(&other)
                    ),
                });
            }
            Err(err) => {
                notices.push(ExportNotice::Parse {
                    filename: file.name.clone(),
                    detail: err.to_string(),
                });
            }
        }
    }

    (documents, notices)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
