mod cli;
mod telemetry;

use crate::cli::{StoreBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use shortlink_core::KeyValueStore;
use shortlink_gateway::{App, AppState};
use shortlink_store::{InMemoryStore, RedisStore, RedisStoreOptions};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    telemetry::init(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        store_backend = %config.store,
        "starting shortlink http server"
    );

    match config.store {
        StoreBackendArg::InMemory => run_server(config.listen_addr, InMemoryStore::new()).await,
        StoreBackendArg::Redis => {
            let options = RedisStoreOptions::builder()
                .key_prefix(config.redis_key_prefix)
                .command_timeout(
                    (config.redis_timeout_ms > 0)
                        .then(|| Duration::from_millis(config.redis_timeout_ms)),
                )
                .build();
            let store = RedisStore::connect(&config.redis_url, options)
                .await
                .with_context(|| format!("failed to connect to redis at {}", config.redis_url))?;
            run_server(config.listen_addr, store).await
        }
    }
}

async fn run_server<S: KeyValueStore + Clone>(
    listen_addr: SocketAddr,
    store: S,
) -> anyhow::Result<()> {
    let router = App::router(AppState::from_store(store));

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
