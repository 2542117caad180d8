//! Recoverable, user-visible conditions collected during an export.

use thiserror::Error;

/// A non-fatal condition the user should see alongside the produced file.
///
/// Notices never abort an export: a file that fails to parse is skipped,
/// and a rejected header override leaves the inferred column labels in
/// place. Each notice occurs at most once per offending input per export.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportNotice {
    /// A file's bytes were not a top-level JSON object; the file was skipped.
    #[error("Error processing file {filename}: {detail}")]
    Parse { filename: String, detail: String },

    /// The user-edited header count did not match the spreadsheet's
    /// inferred column count; the override was ignored. Spreadsheet
    /// exports only.
    #[error(
        "Number of custom headers ({header_count}) must match the number of spreadsheet columns ({column_count})"
    )]
    HeaderCardinality {
        header_count: usize,
        column_count: usize,
    },
}
