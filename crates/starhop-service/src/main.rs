//! Route lookup HTTP service.
//!
//! # Configuration
//!
//! - `STARHOP_DATA_PATH` - dataset file or directory (default: `SolarSystem_Cycle2.txt`)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `STARHOP_QUERY_TIMEOUT_MS` - per-query timeout, disabled when unset
//! - `RUST_LOG` - log level (default: info)
//! - `LOG_FORMAT` - log format: json (default) or text

use std::net::SocketAddr;

use anyhow::Context;
use tracing::{error, info};

use starhop_service::{build_router, init_logging, AppState, LoggingConfig, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(&LoggingConfig::from_env());

    let config = ServiceConfig::from_env();
    info!(
        data_path = %config.data_path.display(),
        port = config.port,
        query_timeout_ms = config.query_timeout.map(|t| t.as_millis() as u64),
        "starting route service"
    );

    let state = AppState::load(&config.data_path)
        .map_err(|e| {
            error!(error = %e, path = %config.data_path.display(), "failed to load application state");
            e
        })
        .with_context(|| format!("failed to load dataset from {}", config.data_path.display()))?
        .with_query_timeout(config.query_timeout);

    info!(
        systems = state.navigator().catalog().len(),
        "application state loaded"
    );

    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("route service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
}
