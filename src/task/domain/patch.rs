//! Partial-update values for existing tasks.

use super::{TaskStatus, TaskTitle};

/// Presence marker for a single optional field in a partial update.
///
/// `Keep` leaves the stored value untouched; `Set` overwrites it. The wire
/// format maps both an absent field and an explicit `null` to `Keep`, so a
/// description cannot be cleared through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldPatch<T> {
    /// Leave the current value unchanged.
    #[default]
    Keep,
    /// Replace the current value.
    Set(T),
}

impl<T> FieldPatch<T> {
    /// Returns `true` when the patch carries a replacement value.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Writes the replacement value into `target` when one is present.
    pub fn apply_to(self, target: &mut T) {
        if let Self::Set(value) = self {
            *target = value;
        }
    }
}

impl<T> From<Option<T>> for FieldPatch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Keep, Self::Set)
    }
}

/// Changes to apply to an existing task.
///
/// The title is always replaced; description and status are replaced only
/// when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPatch {
    title: TaskTitle,
    description: FieldPatch<String>,
    status: FieldPatch<TaskStatus>,
}

impl TaskPatch {
    /// Creates a patch that replaces the title and keeps every other field.
    #[must_use]
    pub const fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: FieldPatch::Keep,
            status: FieldPatch::Keep,
        }
    }

    /// Sets the description change.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<FieldPatch<String>>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status change.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<FieldPatch<TaskStatus>>) -> Self {
        self.status = status.into();
        self
    }

    /// Returns the replacement title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description change.
    #[must_use]
    pub const fn description(&self) -> &FieldPatch<String> {
        &self.description
    }

    /// Returns the status change.
    #[must_use]
    pub const fn status(&self) -> &FieldPatch<TaskStatus> {
        &self.status
    }

    pub(super) fn into_parts(self) -> (TaskTitle, FieldPatch<String>, FieldPatch<TaskStatus>) {
        (self.title, self.description, self.status)
    }
}
