use std::sync::Arc;

use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tokio::signal;
use tracing::{error, info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Config file first, then `SERVER_HOST`/`SERVER_PORT`/`DATABASE_URL`.
pub fn load_config() -> Result<AppConfig, StartupError> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unusable, falling back to environment");
            AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!(event = "shutdown_signal", signal = "ctrl_c", "shutting down"),
        _ = terminate => warn!(event = "shutdown_signal", signal = "sigterm", "shutting down"),
    }
}

/// Public entry: connect, migrate, wire services and serve until shutdown.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = load_config()?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await.map_err(StartupError::from)?;
        info!("migrations applied");
    }

    let db = Arc::new(db);
    let app = routes::build_router(AppState::from_db(Arc::clone(&db)));

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    // the router and its repositories are dropped once serve returns
    match Arc::try_unwrap(db) {
        Ok(db) => {
            db.close().await?;
            info!("database pool closed");
        }
        Err(_) => warn!("database pool still shared, dropping without close"),
    }
    Ok(())
}
