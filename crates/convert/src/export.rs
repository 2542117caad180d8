//! Export orchestration: files + header edit + format in, one artifact out.

use crate::document::{SourceFile, parse_documents};
use crate::encoders::{
    ExportBuffer, ExportFormat, encode_aggregate, encode_delimited, encode_spreadsheet,
};
use crate::error::Result;
use crate::headers::{default_headers, parse_header_edit};
use crate::notice::ExportNotice;

/// The result of one export action.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// The encoded artifact, ready for delivery.
    pub buffer: ExportBuffer,
    /// The effective header list (defaults or the applied user edit).
    pub headers: Vec<String>,
    /// Recoverable conditions collected along the way, in occurrence order.
    pub notices: Vec<ExportNotice>,
}

/// Run one export: parse every file, derive headers, encode.
///
/// Files that fail to parse are skipped with a notice and the export
/// proceeds with the rest. When `header_edit` is given, its tokens
/// replace the default headers (the first valid document's key order).
/// Pure: no shared state survives the call.
pub fn export(
    files: &[SourceFile],
    header_edit: Option<&str>,
    format: ExportFormat,
) -> Result<ExportOutcome> {
    let (documents, mut notices) = parse_documents(files);

    let headers = match header_edit {
        Some(text) => parse_header_edit(text),
        None => default_headers(&documents),
    };

    let bytes = match format {
        ExportFormat::Csv => encode_delimited(&documents, &headers)?,
        ExportFormat::Xlsx => encode_spreadsheet(&documents, &headers, &mut notices)?,
        ExportFormat::Json => encode_aggregate(&documents)?,
    };

    tracing::info!(
        ?format,
        files = files.len(),
        documents = documents.len(),
        notices = notices.len(),
        bytes = bytes.len(),
        "export complete"
    );

    Ok(ExportOutcome {
        buffer: ExportBuffer {
            bytes,
            content_type: format.content_type(),
            filename: format.filename(),
        },
        headers,
        notices,
    })
}
