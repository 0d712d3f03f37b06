//! Schema bootstrap for the task tables.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::result::QueryResult;

/// SQL creating the task schema. Every statement is idempotent.
pub const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-01-20-000000_create_tasks/up.sql");

/// Applies [`SCHEMA_SQL`] on the given connection.
///
/// # Errors
///
/// Returns the database error when any statement fails.
pub fn apply_schema(connection: &mut PgConnection) -> QueryResult<()> {
    connection.batch_execute(SCHEMA_SQL)
}
