//! Task Handler Registry
//!
//! Maps string task names (e.g. "index_path") to executable closures, so the
//! queue and workers stay generic over what a task actually does.

use super::types::Task;

use anyhow::Result;
use dashmap::DashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Thread-safe asynchronous task handler: takes the `Task` and resolves to
/// success or an error that fails the task.
pub type TaskHandlerFn =
    Arc<dyn Fn(Task) -> Pin<Box<dyn Future<Output = Result<()>> + Send>> + Send + Sync>;

/// Registry holding the mapping between task names and their implementation.
pub struct TaskHandlerRegistry {
    handlers: DashMap<String, TaskHandlerFn>,
}

impl TaskHandlerRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            handlers: DashMap::new(),
        })
    }

    /// Registers a handler under a name. A later registration under the same
    /// name replaces the earlier one.
    pub fn register<F, Fut>(&self, handler_name: &str, handler: F)
    where
        F: Fn(Task) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        // Box::pin erases the concrete Future type so different async
        // functions share one map.
        let handler_fn: TaskHandlerFn = Arc::new(move |task: Task| {
            Box::pin(handler(task)) as Pin<Box<dyn Future<Output = Result<()>> + Send>>
        });

        self.handlers.insert(handler_name.to_string(), handler_fn);

        tracing::info!("Registered task handler: {}", handler_name);
    }

    /// Looks up the task's handler and runs it.
    pub async fn execute(&self, task: &Task) -> Result<()> {
        match task {
            Task::Execute { handler, .. } => {
                if let Some(handler_fn) = self.handlers.get(handler) {
                    handler_fn.value()(task.clone()).await
                } else {
                    let error = format!("Unknown task handler: {}", handler);
                    tracing::error!("{}", error);
                    Err(anyhow::anyhow!(error))
                }
            }
        }
    }

    pub fn has_handler(&self, handler_name: &str) -> bool {
        self.handlers.contains_key(handler_name)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
