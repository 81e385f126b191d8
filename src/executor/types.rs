//! Executor Data Types

use serde::{Deserialize, Serialize};

/// Unique identifier for a submitted task.
///
/// Wrapper around a UUID string; also usable as a status-probe handle over
/// the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle state of a task in the queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TaskStatus {
    /// Submitted but not yet picked up by a worker.
    Pending,
    /// Claimed and currently being processed.
    Running,
    /// Finished successfully.
    Completed,
    /// The handler returned an error.
    Failed { error: String },
}

/// A unit of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Task {
    Execute {
        /// Name of the registered handler to invoke (e.g. "index_path").
        handler: String,
        /// Arbitrary JSON payload passed to the handler.
        payload: serde_json::Value,
    },
}

/// A task plus its execution state, as stored in the queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEntry {
    pub task: Task,
    pub status: TaskStatus,
    /// Timestamp (ms) when the task was submitted.
    pub created_at: u64,
}

/// Current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
