//! Task entity and its construction paths.

use super::{FieldPatch, TaskId, TaskPatch, TaskStatus, TaskTitle};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;

/// Reads the clock at the precision the relational store keeps.
///
/// `PostgreSQL` `timestamptz` columns hold microseconds, so timestamps are
/// truncated before they reach any repository.
#[must_use]
pub fn timestamp(clock: &impl Clock) -> DateTime<Utc> {
    clock.utc().trunc_subsecs(6)
}

/// A task that has not been persisted yet.
///
/// Drafts carry no identifier and no timestamps; the repository assigns both
/// when the draft is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
}

impl NewTask {
    /// Creates a pending draft with the given title.
    #[must_use]
    pub const fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: None,
            status: TaskStatus::Pending,
        }
    }

    /// Sets the draft description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the draft status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the draft title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the draft description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the draft status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Persisted task entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Materialises a draft that the store has just assigned an identifier.
    ///
    /// Both timestamps are set to `stamped_at`.
    #[must_use]
    pub fn from_draft(id: TaskId, draft: NewTask, stamped_at: DateTime<Utc>) -> Self {
        let NewTask {
            title,
            description,
            status,
        } = draft;
        Self {
            id,
            title,
            description,
            status,
            created_at: stamped_at,
            updated_at: stamped_at,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update and moves `updated_at` to `now`.
    ///
    /// The title is always replaced. Description and status change only when
    /// the patch sets them. `created_at` is never modified, and `updated_at`
    /// never moves backwards.
    pub fn apply_patch(&mut self, patch: TaskPatch, now: DateTime<Utc>) {
        let (title, description, status) = patch.into_parts();
        self.title = title;
        if let FieldPatch::Set(value) = description {
            self.description = Some(value);
        }
        status.apply_to(&mut self.status);
        self.touch(now);
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.updated_at);
    }
}
