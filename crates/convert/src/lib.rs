//! Conversion core for jmerge.
//!
//! This crate turns a batch of uploaded JSON documents into a single
//! downloadable artifact: delimited text (CSV), a binary spreadsheet
//! (XLSX), or one aggregated JSON array. It owns no I/O beyond byte
//! buffers; the web boundary hands in `(filename, bytes)` pairs plus the
//! user's header edits and receives an [`ExportBuffer`] back.
//!
//! Does NOT handle:
//! - HTTP, uploads, or page rendering (see `crates/web`).
//! - Schema validation or nested-object flattening.
//! - Persistence of any kind; every export is a pure function of its inputs.

pub mod document;
pub mod encoders;
pub mod error;
mod export;
pub mod headers;
mod notice;
pub mod normalize;
pub mod row;

pub use document::{JsonDocument, SourceFile, parse_documents};
pub use encoders::{
    ExportBuffer, ExportFormat, encode_aggregate, encode_delimited, encode_spreadsheet,
};
pub use error::{ConvertError, Result};
pub use export::{ExportOutcome, export};
pub use headers::{default_headers, parse_header_edit};
pub use notice::ExportNotice;
pub use normalize::{FieldValue, normalize};
pub use row::map_row;
