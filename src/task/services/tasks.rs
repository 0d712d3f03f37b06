//! Service layer for task CRUD operations.

use super::{TaskListQuery, TaskRequest, TaskResponse, ValidationErrors, mapper};
use crate::task::{
    domain::{TaskId, timestamp},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task has the requested identifier.
    #[error("Task not found")]
    NotFound(TaskId),
    /// Request fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task CRUD orchestration service.
///
/// The repository may be a concrete adapter or `dyn TaskRepository` when
/// the backend is chosen at runtime.
pub struct TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Fetches one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Repository`] when the lookup fails.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_by_id(&self, id: TaskId) -> TaskServiceResult<TaskResponse> {
        let task = self.repository.find_by_id(id).await?.ok_or_else(|| {
            debug!("task lookup missed");
            TaskServiceError::NotFound(id)
        })?;
        Ok(mapper::to_response(&task))
    }

    /// Lists tasks, optionally filtered by status and paginated.
    ///
    /// Results are ordered by ascending identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the page size is zero or
    /// [`TaskServiceError::Repository`] when the query fails.
    #[instrument(skip(self))]
    pub async fn list(&self, query: TaskListQuery) -> TaskServiceResult<Vec<TaskResponse>> {
        let page = query.page_request()?;
        let tasks = match query.status {
            Some(status) => self.repository.find_by_status(status).await?,
            None => self.repository.find_all().await?,
        };
        let visible = match page {
            Some(page_request) => page_request.slice(tasks),
            None => tasks,
        };
        Ok(mapper::to_response_list(&visible))
    }

    /// Validates and stores a new task.
    ///
    /// A missing status defaults to `PENDING`; both timestamps are set to the
    /// current clock reading.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is blank, in
    /// which case nothing is persisted, or [`TaskServiceError::Repository`]
    /// when the insert fails.
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: TaskRequest) -> TaskServiceResult<TaskResponse> {
        let draft = mapper::to_new_task(request.validate()?);
        let created_at = timestamp(&*self.clock);
        let task = self.repository.insert(&draft, created_at).await?;
        info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(mapper::to_response(&task))
    }

    /// Applies a partial update to an existing task.
    ///
    /// The title is always replaced; description and status change only when
    /// the request supplies them. `updated_at` is refreshed. The lookup and
    /// the write happen in one repository unit of work.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is blank,
    /// [`TaskServiceError::NotFound`] when the task does not exist, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    #[instrument(skip(self, request), fields(task_id = %id))]
    pub async fn update(
        &self,
        id: TaskId,
        request: TaskRequest,
    ) -> TaskServiceResult<TaskResponse> {
        let patch = mapper::to_patch(request.validate()?);
        let updated_at = timestamp(&*self.clock);
        let task = self
            .repository
            .update(id, patch, updated_at)
            .await
            .inspect_err(|err| debug!(error = %err, "task update failed"))?;
        info!(status = %task.status(), "task updated");
        Ok(mapper::to_response(&task))
    }

    /// Removes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Repository`] when the delete fails.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository
            .delete(id)
            .await
            .inspect_err(|err| debug!(error = %err, "task delete failed"))?;
        info!("task deleted");
        Ok(())
    }
}
