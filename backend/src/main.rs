//! Content worker: serves the site's key-value API over HTTP

use anyhow::{Context, Result};
use clap::Parser;
use content_sync::application::repositories::KeyValueStore;
use content_sync::infrastructure::http::worker_router;
use content_sync::infrastructure::persistence::SqliteKeyValueStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "content-worker")]
#[command(about = "Key-value API backing the published site")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8787")]
    bind: SocketAddr,

    /// SQLite database file; in-memory when omitted
    #[arg(long)]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let store = match &args.database {
        Some(path) => SqliteKeyValueStore::new_with_path(path)
            .with_context(|| format!("Failed to open database {}", path.display()))?,
        None => SqliteKeyValueStore::new_in_memory().context("Failed to open in-memory database")?,
    };
    let store: Arc<dyn KeyValueStore> = Arc::new(store);

    let app = worker_router(store);
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;

    info!("Content worker listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.context("Worker stopped")?;
    Ok(())
}
