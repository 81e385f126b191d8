//! Document Indexing and Full-Text Search Service Library
//!
//! This library crate defines the core modules of the service. It serves as
//! the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of six loosely coupled subsystems:
//!
//! - **`api`**: The request/response envelope and the HTTP handlers bridging
//!   the transport to the core's two entry points.
//! - **`ingestion`**: The record parser. Converts comma-delimited files
//!   (header + rows) into documents keyed by their primary-key column.
//! - **`shard`**: The index shard registry. Maps (dataset, branch) pairs to
//!   on-disk index locations and owns every interaction with the embedded
//!   search engine, including per-shard writer serialization.
//! - **`pipeline`**: The write path. Validates indexing requests, enqueues
//!   background jobs that parse, upsert, commit, and consume the input tree.
//! - **`search`**: The read path. Validates and parses queries, executes
//!   them against a shard, and returns relevance-ranked primary keys.
//! - **`executor`**: The background task engine: a queue, a handler
//!   registry, and a fixed-size worker pool.

pub mod api;
pub mod error;
pub mod executor;
pub mod ingestion;
pub mod pipeline;
pub mod search;
pub mod shard;
