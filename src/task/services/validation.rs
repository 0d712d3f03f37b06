//! Field-level request validation.

use super::TaskRequest;
use crate::task::domain::{TaskStatus, TaskTitle};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Field name to message map describing rejected input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates an error set holding a single field failure.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Records a failure for `field`, replacing any earlier message.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Returns `true` when no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the message recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed")?;
        for (index, (field, message)) in self.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A [`TaskRequest`] whose fields have passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTaskRequest {
    /// Non-blank title.
    pub title: TaskTitle,
    /// Description, if supplied.
    pub description: Option<String>,
    /// Status, if supplied.
    pub status: Option<TaskStatus>,
}

impl TaskRequest {
    /// Checks field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] naming `title` when the title is missing
    /// or blank.
    pub fn validate(self) -> Result<ValidatedTaskRequest, ValidationErrors> {
        let (raw_title, description, status) = self.into_parts();
        let title = TaskTitle::new(raw_title.unwrap_or_default())
            .map_err(|err| ValidationErrors::single("title", err.to_string()))?;
        Ok(ValidatedTaskRequest {
            title,
            description,
            status,
        })
    }
}
