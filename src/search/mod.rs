//! Search Module
//!
//! The read path: executes free-text queries against one (dataset, branch)
//! shard and returns relevance-ranked primary keys.
//!
//! ## Overview
//! Search runs fully synchronously within the request, because callers need
//! the result immediately. The executor resolves the shard through the
//! registry, validates and parses the query, runs it, and maps raw hits back
//! to stored keys. A shard that was never indexed is an empty result set,
//! never an error.

pub mod executor;

#[cfg(test)]
mod tests;
