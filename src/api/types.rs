//! API Envelope Types
//!
//! Defines the Data Transfer Objects (DTOs) exchanged with the transport
//! layer, independent of any particular wire format. The `status` field
//! serializes as a bare integer code.

use serde::{Deserialize, Serialize};

/// Outcome code carried by every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum StatusCode {
    /// The request was accepted or completed. An empty result list is still
    /// a success.
    Success = 0,
    /// The input path does not exist or is not readable.
    InvalidPath = 1,
    /// Filesystem or engine I/O failure.
    IoError = 2,
    /// Invalid or syntactically rejected query string.
    ParseError = 3,
}

impl From<StatusCode> for u8 {
    fn from(code: StatusCode) -> u8 {
        code as u8
    }
}

impl TryFrom<u8> for StatusCode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(StatusCode::Success),
            1 => Ok(StatusCode::InvalidPath),
            2 => Ok(StatusCode::IoError),
            3 => Ok(StatusCode::ParseError),
            other => Err(format!("unknown status code: {}", other)),
        }
    }
}

/// Request to index a file or directory tree under a (dataset, branch) shard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexRequest {
    /// Path to a single record file or a directory of record files. The
    /// input is consumed: it is deleted once the background job finishes.
    pub dir: String,
    pub dataset: String,
    pub branch: String,
}

/// Envelope returned by the indexing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub status: StatusCode,
    pub msg: String,
}

impl IndexResponse {
    pub fn success() -> Self {
        Self {
            status: StatusCode::Success,
            msg: String::new(),
        }
    }

    pub fn failure(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            msg: msg.into(),
        }
    }
}

/// Free-text query scoped to one (dataset, branch) shard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub dataset: String,
    pub branch: String,
    pub query: String,
}

/// One matching document, identified by its stored primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub key: String,
}

/// Envelope returned by the search executor. `docs` is ordered by descending
/// relevance and contains at most one entry per matching document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub status: StatusCode,
    pub msg: String,
    pub docs: Vec<SearchHit>,
}

impl SearchResponse {
    pub fn success(keys: Vec<String>) -> Self {
        Self {
            status: StatusCode::Success,
            msg: String::new(),
            docs: keys.into_iter().map(|key| SearchHit { key }).collect(),
        }
    }

    pub fn failure(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            msg: msg.into(),
            docs: Vec::new(),
        }
    }
}
