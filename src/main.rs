use anyhow::Result;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

mod api;
mod capacity;
mod catalog;
mod config;
mod events;
mod state;
mod sweep;

#[cfg(test)]
mod tests;

use catalog::DriveCatalog;
use config::AppConfig;
use events::EventHub;
pub(crate) use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ddp_configurator=info,tower_http=info".into()),
        )
        .init();

    info!("DDP configurator v{} starting up", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        "Configuration loaded: port={}, max_pools={}, default drive={}",
        config.port, config.max_pools, config.pool_defaults.drive_model
    );

    let catalog = DriveCatalog::builtin();
    info!("Drive catalog: {} models", catalog.len());

    let state = Arc::new(AppState::new(config.clone(), catalog, EventHub::new(256)));
    let app = api::router(state);

    let bind_addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("DDP configurator shut down cleanly");
    Ok(())
}

/// Wait for SIGTERM or SIGINT for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { warn!("Received Ctrl+C, shutting down..."); },
        () = terminate => { warn!("Received SIGTERM, shutting down..."); },
    }
}
