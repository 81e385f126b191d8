//! Delimited File Parser
//!
//! Splits record files on a literal comma. Quoting is disabled so a field
//! can never swallow the delimiter; every comma is a column boundary,
//! regardless of surrounding characters.

use super::types::{Document, IngestError, ParsedFile};

use std::path::Path;

/// Parses one record file into documents.
///
/// The first line is the header and must have at least two columns. Each
/// subsequent line becomes a [`Document`] when its column count matches the
/// header; otherwise a [`IngestError::FieldCountMismatch`] is collected and
/// the row is skipped. A file with no lines at all (or only a header)
/// produces zero documents, which is not an error.
pub fn parse(path: &Path) -> Result<ParsedFile, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)?;

    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Ok(ParsedFile::default()),
    };
    if header.len() < 2 {
        return Err(IngestError::MalformedHeader {
            found: header.len(),
        });
    }
    let header: Vec<String> = header.iter().map(str::to_string).collect();

    let mut parsed = ParsedFile::default();
    // Line 1 is the header; data rows start at 2.
    for (offset, record) in records.enumerate() {
        let record = record?;
        let line = offset as u64 + 2;

        if record.len() != header.len() {
            parsed.skipped_rows.push(IngestError::FieldCountMismatch {
                line,
                expected: header.len(),
                found: record.len(),
            });
            continue;
        }

        let values: Vec<&str> = record.iter().collect();
        parsed.documents.push(Document {
            key: values[0].to_string(),
            all: values.join(","),
            columns: header
                .iter()
                .skip(1)
                .zip(values.iter().skip(1))
                .map(|(name, value)| (name.clone(), value.to_string()))
                .collect(),
        });
    }

    Ok(parsed)
}
