//! Ingestion Data Types
//!
//! The in-memory document model produced by the parser, and the errors the
//! parser can report. Documents are handed to a shard writer and discarded;
//! the shard owns the indexed representation.

use serde::{Deserialize, Serialize};

/// One record of an input file, decomposed for indexing.
///
/// `key` is stored verbatim in the shard for exact retrieval. `all` and the
/// named `columns` are analyzed (tokenized, case-folded) by the engine for
/// full-text matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Primary key: column 0 of the row. Unique per shard; indexing a later
    /// record with the same key replaces the earlier document.
    pub key: String,
    /// The full raw row, supporting cross-field free-text queries.
    pub all: String,
    /// Columns 1..N paired with their header names, in header order.
    pub columns: Vec<(String, String)>,
}

/// Parser failures. Header and I/O failures abort a file; row failures are
/// collected per row so the rest of the file still parses.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("header has {found} column(s), at least 2 are required")]
    MalformedHeader { found: usize },

    #[error("row {line} has {found} column(s), header has {expected}")]
    FieldCountMismatch {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Everything extracted from one input file.
#[derive(Debug, Default)]
pub struct ParsedFile {
    /// Documents from the well-formed rows, in file order.
    pub documents: Vec<Document>,
    /// One error per malformed row, for the caller to log.
    pub skipped_rows: Vec<IngestError>,
}
