//! Task Queue
//!
//! In-process store of submitted tasks and their lifecycle state.
//!
//! ## Responsibilities
//! - **Submission**: Assigning ids and recording new tasks as `Pending`.
//! - **Claiming**: The atomic `Pending -> Running` transition workers race on.
//! - **Completion**: Recording terminal states and keeping aggregate counts,
//!   which double as the completion signal for observers and tests.

use super::types::{now_ms, Task, TaskEntry, TaskId, TaskStatus};

use anyhow::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// Aggregate task counts by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub pending: usize,
    pub running: usize,
    pub completed: usize,
    pub failed: usize,
}

/// The shared task store drained by the worker pool.
pub struct TaskQueue {
    tasks: DashMap<TaskId, TaskEntry>,
}

impl TaskQueue {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            tasks: DashMap::new(),
        })
    }

    /// Records a new task as `Pending` and returns its id.
    pub fn submit(&self, task: Task) -> TaskId {
        let task_id = TaskId::new();
        self.tasks.insert(
            task_id.clone(),
            TaskEntry {
                task,
                status: TaskStatus::Pending,
                created_at: now_ms(),
            },
        );

        tracing::debug!("Queued task {}", task_id.0);
        task_id
    }

    /// Snapshot of every task eligible for execution.
    pub fn pending_tasks(&self) -> Vec<(TaskId, TaskEntry)> {
        self.tasks
            .iter()
            .filter(|entry| entry.value().status == TaskStatus::Pending)
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Attempts to lock a pending task for execution.
    ///
    /// Returns `Ok(false)` when another worker claimed it first.
    pub fn try_claim_task(&self, task_id: &TaskId) -> Result<bool> {
        if let Some(mut entry) = self.tasks.get_mut(task_id) {
            if entry.status != TaskStatus::Pending {
                return Ok(false);
            }
            entry.status = TaskStatus::Running;
            tracing::debug!("Claimed task {}", task_id.0);
            return Ok(true);
        }

        Ok(false)
    }

    /// Marks a claimed task `Completed` or `Failed`.
    pub fn complete_task(&self, task_id: &TaskId, result: Result<()>) -> Result<()> {
        if let Some(mut entry) = self.tasks.get_mut(task_id) {
            match result {
                Ok(_) => {
                    entry.status = TaskStatus::Completed;
                    tracing::info!("Task {} completed", task_id.0);
                }
                Err(e) => {
                    entry.status = TaskStatus::Failed {
                        error: e.to_string(),
                    };
                    tracing::error!("Task {} failed: {}", task_id.0, e);
                }
            }
            return Ok(());
        }

        Err(anyhow::anyhow!("Task not found"))
    }

    /// Looks up a task's current entry.
    pub fn get_task(&self, task_id: &TaskId) -> Option<TaskEntry> {
        self.tasks.get(task_id).map(|entry| entry.clone())
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Aggregate counts by status.
    pub fn status_counts(&self) -> TaskCounts {
        let mut counts = TaskCounts {
            pending: 0,
            running: 0,
            completed: 0,
            failed: 0,
        };

        for entry in self.tasks.iter() {
            match entry.status {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::Running => counts.running += 1,
                TaskStatus::Completed => counts.completed += 1,
                TaskStatus::Failed { .. } => counts.failed += 1,
            }
        }

        counts
    }

    /// True when no task is pending or running. The signal tests poll
    /// instead of sleeping for a fixed interval.
    pub fn is_idle(&self) -> bool {
        let counts = self.status_counts();
        counts.pending == 0 && counts.running == 0
    }
}
