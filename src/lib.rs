//! Taskboard: a CRUD REST service for tasks.
//!
//! Tasks carry a title, an optional description and a status. They are
//! stored through a repository port with in-memory and `PostgreSQL`
//! adapters, and exposed over HTTP with Basic authentication.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task domain, persistence and CRUD service
//! - [`api`]: axum router, authentication and error mapping
//! - [`config`]: Command-line and environment configuration
//! - [`telemetry`]: Logging setup

pub mod api;
pub mod config;
pub mod task;
pub mod telemetry;
