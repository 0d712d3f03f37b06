//! Stateless conversions between wire shapes and task entities.
//!
//! Inputs are already validated, so every function here is total.

use super::{TaskResponse, ValidatedTaskRequest};
use crate::task::domain::{NewTask, Task, TaskPatch};

/// Builds an unsaved draft; a missing status becomes `PENDING`.
#[must_use]
pub fn to_new_task(request: ValidatedTaskRequest) -> NewTask {
    let ValidatedTaskRequest {
        title,
        description,
        status,
    } = request;
    NewTask::new(title)
        .with_description(description)
        .with_status(status.unwrap_or_default())
}

/// Builds the partial update described by an update request.
#[must_use]
pub fn to_patch(request: ValidatedTaskRequest) -> TaskPatch {
    let ValidatedTaskRequest {
        title,
        description,
        status,
    } = request;
    TaskPatch::new(title)
        .with_description(description)
        .with_status(status)
}

/// Copies every task field into its response form.
#[must_use]
pub fn to_response(task: &Task) -> TaskResponse {
    TaskResponse {
        id: task.id(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        status: task.status(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

/// Maps a collection element-wise, preserving order.
#[must_use]
pub fn to_response_list(tasks: &[Task]) -> Vec<TaskResponse> {
    tasks.iter().map(to_response).collect()
}
