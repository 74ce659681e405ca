//! Pitchside binary entrypoint wiring the REST API, storage backend, and game clocks.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dao;
mod dto;
mod error;
mod routes;
mod services;
mod state;

use config::{AppConfig, StorageBackend};
use dao::tournament_store::{TournamentStore, file::JsonFileStore, memory::MemoryStore};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let store = open_store(&config).await?;
    let app_state = AppState::new(config, store);

    // Clock tasks are not persisted; rebuild them from game state before
    // the first request lands.
    match app_state.clock().reconcile_on_startup().await {
        Ok(started) => info!(started, "clock reconciliation complete"),
        Err(err) => warn!(error = %err, "clock reconciliation failed; clocks stay stopped"),
    }

    let port = app_state.config().effective_port();
    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    let service = app.into_make_service();
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Open the storage backend selected in the configuration.
async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn TournamentStore>> {
    Ok(match &config.storage {
        StorageBackend::Memory => {
            info!("using in-memory store; data is lost on shutdown");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::File(path) => {
            info!(path = %path.display(), "using JSON file store");
            Arc::new(
                JsonFileStore::open(path.clone())
                    .await
                    .context("opening snapshot file")?,
            )
        }
    })
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: state::SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
