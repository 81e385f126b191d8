//! Service Error Taxonomy
//!
//! Every failure the core can produce is a variant here, and every variant
//! maps to exactly one envelope status code at the API boundary. Internal
//! errors are structured values; nothing is thrown across the core boundary.

use crate::api::types::StatusCode;
use crate::ingestion::types::IngestError;
use crate::shard::registry::ShardError;

/// Failures surfaced by the indexing pipeline and the search executor.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The input path for an indexing request does not exist or cannot be read.
    #[error("{0} does not exist or is not readable")]
    InvalidPath(String),

    /// Filesystem failure while walking or reading input files.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Filesystem or engine failure while opening, writing, or reading a shard.
    #[error(transparent)]
    Shard(#[from] ShardError),

    /// Malformed input file. Contained per file/row during indexing; carried
    /// here so callers of the parser share one taxonomy.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Empty or whitespace-only query string, rejected before the engine.
    #[error("invalid query: {0:?}")]
    InvalidQuery(String),

    /// The engine rejected the query syntax.
    #[error("query parse error: {0}")]
    QueryParse(String),

    /// Catch-all with diagnostic text. Fails the request, never the process.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ServiceError {
    /// The envelope status code this error surfaces as.
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidPath(_) => StatusCode::InvalidPath,
            ServiceError::Io(_) => StatusCode::IoError,
            ServiceError::Shard(_) => StatusCode::IoError,
            ServiceError::Ingest(_) => StatusCode::IoError,
            ServiceError::InvalidQuery(_) => StatusCode::ParseError,
            ServiceError::QueryParse(_) => StatusCode::ParseError,
            ServiceError::Unexpected(_) => StatusCode::IoError,
        }
    }
}
