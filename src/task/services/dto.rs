//! Wire-format shapes for task requests and responses.

use crate::task::domain::{TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of create and update requests.
///
/// Every field is optional at the parsing stage so that a missing title is
/// reported as a validation failure on `title` rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<TaskStatus>,
}

impl TaskRequest {
    /// Creates a request with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
            status: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the requested title, if supplied.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the requested description, if supplied.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the requested status, if supplied.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    pub(super) fn into_parts(self) -> (Option<String>, Option<String>, Option<TaskStatus>) {
        (self.title, self.description, self.status)
    }
}

/// Task representation returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description; `null` when absent.
    pub description: Option<String>,
    /// Task status.
    pub status: TaskStatus,
    /// Creation timestamp (RFC 3339).
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp (RFC 3339).
    pub updated_at: DateTime<Utc>,
}

/// Query parameters accepted by the list operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListQuery {
    /// Only return tasks with this status.
    pub status: Option<TaskStatus>,
    /// Zero-based page index.
    pub page: Option<u32>,
    /// Page size.
    pub size: Option<u32>,
}

impl TaskListQuery {
    /// Lists every task without pagination.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            status: None,
            page: None,
            size: None,
        }
    }

    /// Restricts the listing to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Requests one page of results.
    #[must_use]
    pub const fn with_page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }
}
