//! Runs the task board HTTP service.
//!
//! Usage:
//!
//! ```text
//! taskboard [--bind ADDR] [--database-url URL] [--auth-username USER] ...
//! ```
//!
//! Without `--database-url` (or `DATABASE_URL`) tasks are kept in memory and
//! lost on shutdown. With it, the task schema is created if missing before
//! the listener starts.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use taskboard::api::{AppState, router};
use taskboard::config::ServiceConfig;
use taskboard::task::adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository};
use taskboard::task::ports::TaskRepository;
use taskboard::telemetry::init_logging;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();
    init_logging(config.log_format, &config.log_level)?;

    let repository = open_repository(&config).await?;
    let mut state = AppState::with_repository(repository, config.credentials());
    if let Some(limit) = config.max_body_bytes {
        state = state.with_body_limit(limit);
    }

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %config.bind, "task board listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated abnormally")?;
    info!("task board stopped");
    Ok(())
}

async fn open_repository(config: &ServiceConfig) -> anyhow::Result<Arc<dyn TaskRepository>> {
    let Some(database_url) = config.database_url.as_deref() else {
        warn!("no database URL configured; tasks are kept in memory only");
        return Ok(Arc::new(InMemoryTaskRepository::new()));
    };

    let repository = PostgresTaskRepository::connect(database_url, config.db_pool_size)
        .context("failed to open PostgreSQL pool")?;
    repository
        .ensure_schema()
        .await
        .context("failed to apply task schema")?;
    info!(pool_size = config.db_pool_size, "using PostgreSQL task store");
    Ok(Arc::new(repository))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received");
}
