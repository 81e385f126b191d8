//! HTTP Request Handlers
//!
//! Thin axum adapters between the wire and the two core entry points. All
//! outcomes travel inside the envelope, so these always answer HTTP 200;
//! only the task status probe uses HTTP codes (404 for unknown ids).

use super::types::{IndexRequest, IndexResponse, SearchRequest, SearchResponse};
use crate::executor::queue::TaskQueue;
use crate::executor::types::{TaskId, TaskStatus};
use crate::pipeline::service::IndexPipeline;
use crate::search::executor::SearchExecutor;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

pub async fn handle_index(
    Extension(pipeline): Extension<Arc<IndexPipeline>>,
    Json(req): Json<IndexRequest>,
) -> Json<IndexResponse> {
    Json(pipeline.index_path(req).await)
}

pub async fn handle_search(
    Extension(executor): Extension<Arc<SearchExecutor>>,
    Json(req): Json<SearchRequest>,
) -> Json<SearchResponse> {
    Json(executor.search(&req))
}

/// Status probe for a submitted indexing task.
#[derive(Debug, Serialize)]
pub struct TaskStatusResponse {
    pub task_id: TaskId,
    pub status: TaskStatus,
    pub created_at: u64,
}

pub async fn handle_task_status(
    Extension(queue): Extension<Arc<TaskQueue>>,
    Path(task_id): Path<String>,
) -> (StatusCode, Json<Option<TaskStatusResponse>>) {
    let task_id = TaskId(task_id);

    match queue.get_task(&task_id) {
        Some(entry) => (
            StatusCode::OK,
            Json(Some(TaskStatusResponse {
                task_id,
                status: entry.status,
                created_at: entry.created_at,
            })),
        ),
        None => {
            tracing::debug!("Task not found: {}", task_id.0);
            (StatusCode::NOT_FOUND, Json(None))
        }
    }
}
