//! Delimited-text (CSV) encoder.

use crate::document::JsonDocument;
use crate::error::Result;
use crate::row::map_row;

/// Encode the documents as UTF-8 CSV: one header record written verbatim,
/// then one positional record per document in input order.
///
/// Quoting follows RFC 4180 via the `csv` crate. An empty document list
/// yields a headers-only file, not an error.
pub fn encode_delimited(documents: &[JsonDocument], headers: &[String]) -> Result<Vec<u8>> {
    // An empty header list would mean zero-field records; emit nothing
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    // The csv crate has no direct Vec output, so buffer through a writer
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(headers)?;
        for document in documents {
            writer.write_record(map_row(document, headers))?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}
