//! Binary spreadsheet (XLSX) encoder.

use rust_xlsxwriter::{Workbook, Worksheet};
use serde_json::Value;

use crate::document::JsonDocument;
use crate::error::Result;
use crate::notice::ExportNotice;

/// Encode the documents as one rectangular XLSX sheet.
///
/// Columns come from the documents themselves: the union of field names in
/// first-appearance order across all documents. The supplied headers only
/// relabel those columns, and only when their count matches exactly;
/// otherwise a [`ExportNotice::HeaderCardinality`] notice is pushed and
/// the inferred labels are kept. This intentionally differs from the
/// delimited-text encoder, which maps every row positionally against the
/// headers (see DESIGN.md).
pub fn encode_spreadsheet(
    documents: &[JsonDocument],
    headers: &[String],
    notices: &mut Vec<ExportNotice>,
) -> Result<Vec<u8>> {
    let columns = infer_columns(documents);

    let labels: &[String] = if headers.len() == columns.len() {
        headers
    } else {
        notices.push(ExportNotice::HeaderCardinality {
            header_count: headers.len(),
            column_count: columns.len(),
        });
        &columns
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, label) in labels.iter().enumerate() {
        worksheet.write_string(0, col as u16, label.as_str())?;
    }
    for (row, document) in documents.iter().enumerate() {
        for (col, column) in columns.iter().enumerate() {
            write_cell(
                worksheet,
                (row + 1) as u32,
                col as u16,
                document.fields.get(column),
            )?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Union of field names in first-appearance order across all documents.
fn infer_columns(documents: &[JsonDocument]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for document in documents {
        for key in document.fields.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Write one cell, typed where the JSON value allows it.
///
/// Missing fields and nulls leave the cell blank. Nested arrays and
/// objects are written as compact JSON text.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<&Value>,
) -> Result<()> {
    match value {
        None | Some(Value::Null) => {}
        Some(Value::Bool(b)) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) => {
                worksheet.write_number(row, col, f)?;
            }
            None => {
                worksheet.write_string(row, col, n.to_string())?;
            }
        },
        Some(Value::String(s)) => {
            worksheet.write_string(row, col, s.as_str())?;
        }
        Some(other) => {
            worksheet.write_string(row, col, serde_json::to_string(other).unwrap_or_default())?;
        }
    }
    Ok(())
}
