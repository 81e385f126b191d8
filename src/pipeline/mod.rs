//! Indexing Pipeline Module
//!
//! The write path: turns a submitted file or directory of record files into
//! indexed documents, off the request-handling path.
//!
//! ## Workflow
//! 1. **Validation**: The input path is checked synchronously, since it
//!    decides the immediate response code. An unreadable path rejects the
//!    request before any work is queued.
//! 2. **Submission**: A unit of work is enqueued; the caller gets its
//!    response before indexing runs. Completion is observable only through
//!    the task status and the later presence of search results.
//! 3. **Execution**: A worker scans the input, short-circuits when every
//!    candidate file is empty, otherwise parses and upserts each file into
//!    the shard and commits. A failing file is logged and skipped; it never
//!    aborts the batch.
//! 4. **Cleanup**: The input tree is consumed once the job finishes,
//!    deleted files-first and deepest-first.
//!
//! ## Submodules
//! - **`walker`**: Directory traversal and input-tree deletion.
//! - **`service`**: Request entry point and the background job body.

pub mod service;
pub mod walker;
