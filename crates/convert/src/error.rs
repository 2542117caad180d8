//! Error types for the conversion core.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Fatal errors raised while encoding an export buffer.
///
/// Per-file parse failures and header-cardinality mismatches are NOT
/// errors; they are surfaced as [`crate::ExportNotice`] values and the
/// export continues without the offending input.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// CSV record writing failed.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing an in-memory buffer failed.
    #[error("Buffer write failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Spreadsheet container construction failed.
    #[error("Spreadsheet encoding failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// Unrecognized export format token from the boundary.
    #[error("Invalid export format: {0}. Valid options: csv, xlsx, json")]
    UnknownFormat(String),
}
