use clap::Parser;
use detection_store::api::router;
use detection_store::config::Config;
use detection_store::storage::{MemoryStore, SharedStore, TimeoutStore};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let bind_addr = config.bind_addr();

    tracing::info!(
        "Most recent record chosen by {:?}, store timeout {}ms",
        config.latest_by,
        config.store_timeout_ms
    );

    // 1. Storage layer:
    let store: SharedStore = Arc::new(TimeoutStore::new(
        MemoryStore::new(config.latest_by),
        config.store_timeout(),
    ));

    // 2. HTTP Router:
    let app = router(store);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await?;

    tracing::info!("Shutting down");
    Ok(())
}
