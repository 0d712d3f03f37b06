//! Command-line and environment configuration for the task board server.
//!
//! Every flag falls back to an environment variable, so the service can be
//! configured entirely through its container environment.

use crate::api::BasicCredentials;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

/// Output format for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per record.
    Json,
}

/// Server configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskboard")]
#[command(about = "Task board REST service", long_about = None)]
pub struct ServiceConfig {
    /// Socket address to listen on.
    #[arg(long, env = "TASKS_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// `PostgreSQL` connection URL; the in-memory store is used when absent.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TASKS_DB_POOL_SIZE", default_value_t = 8)]
    pub db_pool_size: u32,

    /// Username accepted by Basic authentication.
    #[arg(long, env = "TASKS_AUTH_USERNAME", default_value = "admin")]
    pub auth_username: String,

    /// Password accepted by Basic authentication.
    #[arg(
        long,
        env = "TASKS_AUTH_PASSWORD",
        default_value = "admin",
        hide_env_values = true
    )]
    pub auth_password: String,

    /// Largest accepted request body in bytes; bodies are unbounded when
    /// absent.
    #[arg(long, env = "TASKS_MAX_BODY_BYTES")]
    pub max_body_bytes: Option<usize>,

    /// Log output format.
    #[arg(long, env = "TASKS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Default log level; `RUST_LOG` takes precedence when set.
    #[arg(long, env = "TASKS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServiceConfig {
    /// Returns the credentials accepted by the task routes.
    #[must_use]
    pub fn credentials(&self) -> BasicCredentials {
        BasicCredentials::new(&self.auth_username, &self.auth_password)
    }
}
