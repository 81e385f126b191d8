use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use shardline::api::handlers::{handle_index, handle_search, handle_task_status};
use shardline::executor::executor::TaskExecutor;
use shardline::executor::queue::TaskQueue;
use shardline::executor::registry::TaskHandlerRegistry;
use shardline::pipeline::service::IndexPipeline;
use shardline::search::executor::SearchExecutor;
use shardline::shard::registry::{ShardRegistry, DEFAULT_INDEX_ROOT};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: Option<SocketAddr> = None;
    let mut index_root = DEFAULT_INDEX_ROOT.to_string();
    let mut workers = 4usize;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--index-root" => {
                index_root = args[i + 1].clone();
                i += 2;
            }
            "--workers" => {
                workers = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let Some(bind_addr) = bind_addr else {
        eprintln!("Usage: {} --bind <addr:port> [--index-root <dir>] [--workers <n>]", args[0]);
        eprintln!("Example: {} --bind 127.0.0.1:6000 --index-root index", args[0]);
        std::process::exit(1);
    };

    tracing::info!("Index root: {}", index_root);

    // 1. Shard registry:
    let shards = ShardRegistry::new(index_root);

    // 2. Background executor:
    let queue = TaskQueue::new();
    let handlers = TaskHandlerRegistry::new();
    let pipeline = IndexPipeline::new(shards.clone(), queue.clone(), &handlers);
    let executor = TaskExecutor::new(queue.clone(), handlers, workers);
    executor.start();

    // 3. Search executor:
    let search = SearchExecutor::new(shards);

    // 4. HTTP router:
    let app = Router::new()
        .route("/index", post(handle_index))
        .route("/search", post(handle_search))
        .route("/tasks/:id", get(handle_task_status))
        .layer(Extension(pipeline))
        .layer(Extension(search))
        .layer(Extension(queue));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
