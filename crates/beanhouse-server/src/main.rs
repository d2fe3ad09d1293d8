//! HTTP server entry point.
//!
//! Opens the database, seeds the menu, and serves the API on `HOST:PORT`.

use std::sync::Arc;

use anyhow::{Context, Result};
use beanhouse_server::config::ServerConfig;
use beanhouse_server::{build_router, ServerState};
use beanhouse_store::{seed, Store};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;

    let store = Store::open(&config.database_url).context("failed to initialize database")?;
    seed::seed_if_empty(&store).context("failed to seed menu")?;
    let beans = store.count_beans().context("failed to count beans")?;
    info!("Menu has {} beans", beans);

    let app = build_router(Arc::new(ServerState::new(store)));

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
