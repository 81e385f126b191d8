//! Worker Pool
//!
//! Spawns a fixed number of workers that poll the `TaskQueue`, claim pending
//! tasks, and run them to completion. Once a task starts it is never
//! cancelled; the requesting connection may be long gone.

use super::queue::TaskQueue;
use super::registry::TaskHandlerRegistry;
use super::types::Task;

use std::sync::Arc;
use std::time::Duration;

/// How long an idle worker sleeps between queue polls.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The engine that drives task execution.
pub struct TaskExecutor {
    queue: Arc<TaskQueue>,
    handlers: Arc<TaskHandlerRegistry>,
    worker_count: usize,
}

impl TaskExecutor {
    pub fn new(
        queue: Arc<TaskQueue>,
        handlers: Arc<TaskHandlerRegistry>,
        worker_count: usize,
    ) -> Arc<Self> {
        Arc::new(Self {
            queue,
            handlers,
            worker_count,
        })
    }

    /// Spawns the worker tasks and returns immediately.
    pub fn start(self: &Arc<Self>) {
        tracing::info!("Starting {} task workers", self.worker_count);

        for worker_id in 0..self.worker_count {
            let executor = self.clone();
            tokio::spawn(async move {
                executor.worker_loop(worker_id).await;
            });
        }
    }

    /// One worker: poll, claim, execute, finalize, repeat.
    async fn worker_loop(&self, worker_id: usize) {
        tracing::info!("Worker {} started", worker_id);

        loop {
            let tasks = self.queue.pending_tasks();

            if tasks.is_empty() {
                tokio::time::sleep(IDLE_POLL_INTERVAL).await;
                continue;
            }

            let mut claimed = false;
            for (task_id, entry) in tasks {
                match self.queue.try_claim_task(&task_id) {
                    Ok(true) => {
                        tracing::info!(
                            "Worker {} claimed task {} (handler: {})",
                            worker_id,
                            task_id.0,
                            match &entry.task {
                                Task::Execute { handler, .. } => handler,
                            }
                        );

                        let result = self.handlers.execute(&entry.task).await;
                        if let Err(e) = self.queue.complete_task(&task_id, result) {
                            tracing::error!("Failed to finalize task {}: {}", task_id.0, e);
                        }

                        claimed = true;
                        break; // Refresh the task list before the next claim.
                    }
                    Ok(false) => continue,
                    Err(e) => {
                        tracing::warn!("Failed to claim task {}: {}", task_id.0, e);
                        continue;
                    }
                }
            }

            // Every candidate was snatched by another worker; back off briefly.
            if !claimed {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        }
    }
}
