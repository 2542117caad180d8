//! Format encoders and the export artifact they produce.
//!
//! Three independent, stateless encoders, each consuming the ordered list
//! of successfully parsed documents:
//! - delimited text (CSV, headers applied per row)
//! - binary spreadsheet (XLSX, columns inferred from the documents)
//! - aggregated JSON (pretty-printed array, headers ignored)

mod aggregate;
mod delimited;
mod spreadsheet;

pub use aggregate::encode_aggregate;
pub use delimited::encode_delimited;
pub use spreadsheet::encode_spreadsheet;

use crate::error::{ConvertError, Result};

/// The user's choice of download format. Exactly one per export action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Json,
}

impl ExportFormat {
    /// Parse the boundary's format token.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ConvertError::UnknownFormat(s.to_string())),
        }
    }

    /// MIME label declared to the boundary.
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Json => "application/json",
        }
    }

    /// Fixed artifact name for the download.
    pub fn filename(self) -> &'static str {
        match self {
            ExportFormat::Csv => "custom_file.csv",
            ExportFormat::Xlsx => "custom_file.xlsx",
            ExportFormat::Json => "custom_file.json",
        }
    }
}

/// The terminal artifact handed back to the boundary.
#[derive(Debug, Clone)]
pub struct ExportBuffer {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: &'static str,
}
