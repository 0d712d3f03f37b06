//! `PostgreSQL` adapters for task persistence.

mod migrations;
mod models;
mod repository;
mod schema;

pub use migrations::{SCHEMA_SQL, apply_schema};
pub use repository::{PostgresTaskRepository, TaskPgPool};
