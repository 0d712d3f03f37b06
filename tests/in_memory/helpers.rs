//! Shared test helpers for in-memory repository integration tests.

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use rstest::fixture;
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::domain::{NewTask, TaskStatus, TaskTitle, timestamp};

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Returns the current time at storage precision.
#[must_use]
pub fn now() -> DateTime<Utc> {
    timestamp(&DefaultClock)
}

/// Reads the system clock without truncation.
#[must_use]
pub fn raw_now() -> DateTime<Utc> {
    DefaultClock.utc()
}

/// Builds a draft with the given title and status.
///
/// # Errors
///
/// Returns an error when `title` is blank.
pub fn draft(title: &str, status: TaskStatus) -> Result<NewTask, eyre::Report> {
    Ok(NewTask::new(TaskTitle::new(title)?).with_status(status))
}
