//! The `trivia serve` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use trivia_core::seed::seed_store;
use trivia_store::config::{create_store, load_config_from};

pub async fn execute(config_path: Option<PathBuf>, bind: Option<String>, seed: bool) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(bind) = bind {
        config.bind = bind;
    }

    let store = create_store(&config.store)?;
    if seed || config.seed_on_start {
        seed_store(store.as_ref())
            .await
            .context("failed to seed store")?;
    }

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    trivia_api::serve(listener, store, shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("trivia API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
