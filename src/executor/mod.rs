//! Background Task Executor Module
//!
//! Runs indexing jobs off the request-handling path. A request handler
//! validates its input synchronously, enqueues a unit of work, and answers
//! immediately; a fixed-size worker pool drains the queue.
//!
//! ## Architecture Overview
//! 1. **Submission**: Validated work is submitted to the `TaskQueue` as a
//!    named handler plus a JSON payload.
//! 2. **Claiming**: Workers poll for `Pending` tasks and claim them with an
//!    atomic `Pending -> Running` transition, so one task runs exactly once
//!    even with several workers.
//! 3. **Completion**: A finished task is marked `Completed` or `Failed` and
//!    stays in the queue; its status and the aggregate counters are the
//!    observable completion signal. No result channel exists because the
//!    caller already received its response.
//!
//! ## Submodules
//! - **`queue`**: Task store and state transitions.
//! - **`registry`**: Maps handler names to executable code.
//! - **`executor`**: The worker pool.
//! - **`types`**: Task ids, statuses, and entries.

pub mod executor;
pub mod queue;
pub mod registry;
pub mod types;
