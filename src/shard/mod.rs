//! Index Shard Module
//!
//! Owns the mapping from (dataset, branch) pairs to persistent index shards
//! and every interaction with the embedded search engine.
//!
//! ## Core Concepts
//! - **Addressing**: A shard lives at `root/dataset/branch`. The same pair
//!   always resolves to the same location; distinct pairs never collide.
//! - **Lifecycle**: A shard is created lazily on the first write and never
//!   implicitly deleted. A shard that was never created is reported through
//!   `exists`, distinguished from an I/O failure, so searches can treat
//!   "never indexed" as an empty result set.
//! - **Writers**: One active writer per shard. Concurrent write-opens for
//!   the same shard queue on a per-shard lock; shards are independent.
//!
//! ## Submodules
//! - **`schema`**: The engine schema shared by every shard.
//! - **`registry`**: Path resolution, existence checks, and the RAII
//!   writer/reader handles.

pub mod registry;
pub mod schema;
