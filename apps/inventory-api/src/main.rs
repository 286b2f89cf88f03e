//! # Sellhub Inventory API Server
//!
//! ## Startup
//! ```text
//! .env ──► ApiConfig ──► ProductStore ──► InventoryService ──► axum::serve
//!                        (sqlite|memory)                       (graceful
//!                                                               shutdown)
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use inventory_api::{build_app, ApiConfig, InventoryService, StoreBackend};
use sellhub_db::{Database, DbConfig, MemoryProductStore, ProductStore};

const DEFAULT_LOG_FILTER: &str = "info,sellhub=debug,inventory_api=debug,sqlx=warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting Sellhub Inventory API...");

    let config = ApiConfig::load().context("loading configuration")?;
    info!(
        addr = %config.socket_addr(),
        variant = ?config.variant,
        store = ?config.store_backend,
        "Configuration loaded"
    );

    let store = open_store(&config).await?;
    let app = build_app(InventoryService::new(store), config.variant);

    let listener = TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("binding {}", config.socket_addr()))?;
    info!(addr = %config.socket_addr(), "Inventory API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .init();
}

async fn open_store(config: &ApiConfig) -> anyhow::Result<Arc<dyn ProductStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            info!("Using in-memory product store");
            Ok(Arc::new(MemoryProductStore::new()))
        }
        StoreBackend::Sqlite => {
            if let Some(parent) = config.database_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }

            let db_config = DbConfig::new(config.database_path.clone())
                .max_connections(config.db_max_connections)
                .run_migrations(config.run_migrations);

            let db = Database::new(db_config)
                .await
                .with_context(|| format!("opening {}", config.database_path.display()))?;
            info!(path = %config.database_path.display(), "Database ready");

            Ok(Arc::new(db.products()))
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
