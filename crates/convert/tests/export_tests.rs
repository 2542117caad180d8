//! End-to-end tests for the export orchestration.

use jmerge_convert::{ExportFormat, ExportNotice, SourceFile, export, map_row};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn file(name: &str, body: &str) -> SourceFile {
    SourceFile::new(name, body.as_bytes().to_vec())
}

#[test]
fn test_csv_export_combines_documents_with_flattened_newlines() {
    let files = vec![
        file("one.json", r#"{"a":1,"b":"x\ny"}"#),
        file("two.json", r#"{"a":2,"b":"z"}"#),
    ];
    let outcome = export(&files, Some("a,b"), ExportFormat::Csv).unwrap();

    assert_eq!(
        String::from_utf8(outcome.buffer.bytes).unwrap(),
        "a,b\n1,x | y\n2,z\n"
    );
    assert_eq!(outcome.buffer.content_type, "text/csv");
    assert_eq!(outcome.buffer.filename, "custom_file.csv");
    assert!(outcome.notices.is_empty());
}

#[test]
fn test_default_headers_follow_first_document_key_order() {
    let files = vec![file("one.json", r#"{"zeta":1,"alpha":2}"#)];
    let outcome = export(&files, None, ExportFormat::Csv).unwrap();
    assert_eq!(outcome.headers, ["zeta", "alpha"]);
    assert!(
        String::from_utf8(outcome.buffer.bytes)
            .unwrap()
            .starts_with("zeta,alpha\n")
    );
}

#[test]
fn test_invalid_file_is_reported_and_excluded() {
    let files = vec![
        file("good.json", r#"{"a":1}"#),
        file("broken.json", "{oops"),
        file("fine.json", r#"{"a":2}"#),
    ];
    let outcome = export(&files, None, ExportFormat::Csv).unwrap();

    let text = String::from_utf8(outcome.buffer.bytes).unwrap();
    assert_eq!(text.lines().count(), 3); // header + two valid rows
    assert_eq!(outcome.notices.len(), 1);
    assert!(
        outcome.notices[0]
            .to_string()
            .starts_with("Error processing file broken.json")
    );
}

#[test]
fn test_json_export_preserves_valid_documents_in_order() {
    let files = vec![
        file("one.json", r#"{"a":1}"#),
        file("broken.json", "not json"),
        file("two.json", r#"{"a":2}"#),
    ];
    let outcome = export(&files, None, ExportFormat::Json).unwrap();

    let reparsed: Value = serde_json::from_slice(&outcome.buffer.bytes).unwrap();
    assert_eq!(reparsed, json!([{"a":1},{"a":2}]));
    assert_eq!(outcome.buffer.content_type, "application/json");
    assert_eq!(outcome.notices.len(), 1);
}

#[test]
fn test_json_export_ignores_header_edit() {
    let files = vec![file("one.json", r#"{"a":1,"b":2}"#)];
    let outcome = export(&files, Some("x,y,z"), ExportFormat::Json).unwrap();
    let reparsed: Value = serde_json::from_slice(&outcome.buffer.bytes).unwrap();
    assert_eq!(reparsed, json!([{"a":1,"b":2}]));
}

#[test]
fn test_xlsx_cardinality_mismatch_is_a_notice_not_an_error() {
    let files = vec![file("one.json", r#"{"a":1,"b":2}"#)];
    let outcome = export(&files, Some("a,b,c"), ExportFormat::Xlsx).unwrap();

    assert_eq!(
        outcome.notices,
        [ExportNotice::HeaderCardinality {
            header_count: 3,
            column_count: 2,
        }]
    );
    assert_eq!(&outcome.buffer.bytes[..2], b"PK");
    assert_eq!(outcome.buffer.filename, "custom_file.xlsx");
}

#[test]
fn test_xlsx_heterogeneous_documents_use_inferred_columns() {
    // Two documents with different key sets: columns are the union, so a
    // two-token header edit no longer matches and is rejected.
    let files = vec![
        file("one.json", r#"{"a":1,"b":2}"#),
        file("two.json", r#"{"b":3,"c":4}"#),
    ];
    let outcome = export(&files, Some("a,b"), ExportFormat::Xlsx).unwrap();
    assert_eq!(
        outcome.notices,
        [ExportNotice::HeaderCardinality {
            header_count: 2,
            column_count: 3,
        }]
    );
}

#[test]
fn test_no_files_yields_empty_artifacts() {
    let csv = export(&[], None, ExportFormat::Csv).unwrap();
    assert!(csv.buffer.bytes.is_empty());

    let json = export(&[], None, ExportFormat::Json).unwrap();
    assert_eq!(json.buffer.bytes, b"[]");

    let xlsx = export(&[], None, ExportFormat::Xlsx).unwrap();
    assert_eq!(&xlsx.buffer.bytes[..2], b"PK");
}

#[test]
fn test_header_edit_replaces_defaults_for_csv() {
    let files = vec![file("one.json", r#"{"a":"1","b":"2"}"#)];
    let outcome = export(&files, Some(" a , b "), ExportFormat::Csv).unwrap();
    assert_eq!(outcome.headers, ["a", "b"]);
    assert_eq!(
        String::from_utf8(outcome.buffer.bytes).unwrap(),
        "a,b\n1,2\n"
    );
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z \\n]{0,20}".prop_map(Value::String),
        prop::collection::vec("[a-z]{0,6}", 0..4)
            .prop_map(|items| json!(items)),
    ]
}

proptest! {
    // Rows are always rectangular: length equals the header count no
    // matter what the document holds.
    #[test]
    fn prop_row_length_equals_header_count(
        headers in prop::collection::vec("[a-z]{1,8}", 0..8),
        fields in prop::collection::vec(("[a-z]{1,8}", arb_value()), 0..8),
    ) {
        let mut map = Map::new();
        for (key, value) in fields {
            map.insert(key, value);
        }
        let body = serde_json::to_vec(&Value::Object(map)).unwrap();
        let (documents, _) =
            jmerge_convert::parse_documents(&[SourceFile::new("p.json", body)]);

        let row = map_row(&documents[0], &headers);
        prop_assert_eq!(row.len(), headers.len());
        for cell in &row {
            prop_assert!(!cell.contains('\n'));
        }
    }
}
