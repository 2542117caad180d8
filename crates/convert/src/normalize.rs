//! Field normalization: one JSON field value to one flat display string.

use serde_json::Value;

/// Tagged view over a looked-up field value.
///
/// Makes the scalar / sequence / missing split explicit at the type level
/// instead of branching on `Value` shapes at every call site.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// The field is absent from the document, or its value is JSON null.
    Missing,
    /// The value is an ordered sequence.
    Sequence(&'a [Value]),
    /// Any other value.
    Scalar(&'a Value),
}

impl<'a> FieldValue<'a> {
    /// Classify the result of a field lookup.
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => FieldValue::Missing,
            Some(Value::Array(items)) => FieldValue::Sequence(items),
            Some(value) => FieldValue::Scalar(value),
        }
    }
}

/// Normalize a field value to a flat display string. Total; never errors.
///
/// - Sequences join their elements with `", "`. Non-string elements use
///   their compact JSON form.
/// - Missing, empty, and falsy values (`""`, `false`, numeric zero, empty
///   containers) become the empty string.
/// - Every newline in the result is replaced with the literal `" | "`,
///   so one field never spans multiple output lines.
pub fn normalize(field: FieldValue<'_>) -> String {
    let text = match field {
        FieldValue::Missing => String::new(),
        FieldValue::Sequence(items) => items
            .iter()
            .map(element_text)
            .collect::<Vec<_>>()
            .join(", "),
        FieldValue::Scalar(value) => scalar_text(value),
    };
    if text.contains('\n') {
        text.replace('\n', " | ")
    } else {
        text
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                String::new()
            } else {
                n.to_string()
            }
        }
        Value::Object(map) if map.is_empty() => String::new(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

fn element_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
