//! Indexing Pipeline Service
//!
//! The write-path entry point and the background job body. `index_path`
//! validates synchronously and enqueues; `run_index_job` is what a worker
//! eventually executes.

use super::walker;
use crate::api::types::{IndexRequest, IndexResponse};
use crate::error::ServiceError;
use crate::executor::queue::TaskQueue;
use crate::executor::registry::TaskHandlerRegistry;
use crate::executor::types::Task;
use crate::ingestion::csv;
use crate::shard::registry::{ShardId, ShardRegistry, ShardWriter};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Handler name the pipeline registers its job under.
pub const INDEX_HANDLER: &str = "index_path";

/// Payload of one queued indexing job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexJob {
    pub dir: PathBuf,
    pub dataset: String,
    pub branch: String,
}

/// The write-path service: validates requests and hands the actual work to
/// the background executor.
pub struct IndexPipeline {
    queue: Arc<TaskQueue>,
}

impl IndexPipeline {
    /// Builds the pipeline and registers its job handler.
    pub fn new(
        shards: Arc<ShardRegistry>,
        queue: Arc<TaskQueue>,
        handlers: &TaskHandlerRegistry,
    ) -> Arc<Self> {
        handlers.register(INDEX_HANDLER, move |task| {
            let shards = shards.clone();
            async move {
                let Task::Execute { payload, .. } = task;
                let job: IndexJob = serde_json::from_value(payload)?;
                run_index_job(&shards, &job).await?;
                Ok(())
            }
        });

        Arc::new(Self { queue })
    }

    /// Accepts an indexing request.
    ///
    /// The path check runs synchronously because it determines the response
    /// code; everything else happens on a background worker after this
    /// returns. A success response therefore means "accepted", not "indexed".
    pub async fn index_path(&self, req: IndexRequest) -> IndexResponse {
        let dir = PathBuf::from(&req.dir);
        if std::fs::metadata(&dir).is_err() {
            let err = ServiceError::InvalidPath(req.dir.clone());
            tracing::warn!("Rejected indexing request: {}", err);
            return IndexResponse::failure(err.status(), err.to_string());
        }

        let job = IndexJob {
            dir,
            dataset: req.dataset,
            branch: req.branch,
        };
        let task_id = self.queue.submit(Task::Execute {
            handler: INDEX_HANDLER.to_string(),
            payload: serde_json::to_value(&job).unwrap(),
        });
        tracing::info!(
            "Queued indexing of {} into {}/{} as task {}",
            job.dir.display(),
            job.dataset,
            job.branch,
            task_id.0
        );

        IndexResponse::success()
    }
}

/// The background job: scan, write, commit, consume input.
///
/// Walks the state machine `Scanning -> (EmptyInput -> Cleanup) |
/// (Writing -> Committed -> Cleanup)`. Failures before the writer opens
/// leave the input in place; per-file failures are contained.
pub async fn run_index_job(
    shards: &Arc<ShardRegistry>,
    job: &IndexJob,
) -> Result<(), ServiceError> {
    let shard = ShardId::new(&job.dataset, &job.branch);

    let mut files = Vec::new();
    for entry in walker::walk(&job.dir) {
        files.push(entry?);
    }

    // Do not create a shard for an empty submission.
    let live: Vec<&PathBuf> = files
        .iter()
        .filter(|path| {
            path.metadata().map(|m| m.len() > 0).unwrap_or(false)
        })
        .collect();
    if live.is_empty() {
        tracing::warn!(
            "No documents or documents are empty, indexing into {} skipped",
            shard
        );
        walker::remove_tree(&job.dir);
        return Ok(());
    }

    let mut writer = shards.open_for_write(&shard).await?;

    let mut indexed = 0usize;
    for path in live {
        match index_file(&mut writer, path) {
            Ok(count) => indexed += count,
            Err(e) => {
                tracing::error!("Indexing failed for file {}: {}", path.display(), e);
            }
        }
    }

    writer.commit()?;
    walker::remove_tree(&job.dir);

    tracing::info!("Indexed {} document(s) into {}", indexed, shard);
    Ok(())
}

/// Parses one file and upserts its documents, returning how many.
fn index_file(writer: &mut ShardWriter, path: &Path) -> Result<usize, ServiceError> {
    let parsed = csv::parse(path)?;

    for skipped in &parsed.skipped_rows {
        tracing::warn!("Skipping row in {}: {}", path.display(), skipped);
    }
    for doc in &parsed.documents {
        writer.upsert(doc)?;
    }

    Ok(parsed.documents.len())
}
