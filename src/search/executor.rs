//! Search Executor
//!
//! Validates, parses, and runs one query against one shard. Reader handles
//! are scoped to the call and dropped before the response returns.

use crate::api::types::{SearchRequest, SearchResponse};
use crate::error::ServiceError;
use crate::shard::registry::{ShardId, ShardRegistry};

use std::sync::Arc;

/// The read-path service.
pub struct SearchExecutor {
    shards: Arc<ShardRegistry>,
}

impl SearchExecutor {
    pub fn new(shards: Arc<ShardRegistry>) -> Arc<Self> {
        Arc::new(Self { shards })
    }

    /// Runs the query and wraps the outcome in the response envelope.
    pub fn search(&self, req: &SearchRequest) -> SearchResponse {
        match self.execute(req) {
            Ok(keys) => SearchResponse::success(keys),
            Err(e) => {
                tracing::warn!(
                    "Search failed for {}/{}: {}",
                    req.dataset,
                    req.branch,
                    e
                );
                SearchResponse::failure(e.status(), e.to_string())
            }
        }
    }

    fn execute(&self, req: &SearchRequest) -> Result<Vec<String>, ServiceError> {
        let shard = ShardId::new(&req.dataset, &req.branch);

        // Never indexed means zero results, checked before anything else so
        // even a bad query against a missing shard succeeds with no hits.
        if !self.shards.exists(&shard) {
            return Ok(Vec::new());
        }

        let trimmed = req.query.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::InvalidQuery(req.query.clone()));
        }

        let reader = self.shards.open_for_read(&shard)?;
        let query = reader
            .query_parser()
            .parse_query(trimmed)
            .map_err(|e| ServiceError::QueryParse(e.to_string()))?;

        Ok(reader.search(query.as_ref())?)
    }
}
