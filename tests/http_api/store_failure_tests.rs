//! Responses when the task store fails.

use super::helpers::{Call, state_over};
use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use chrono::{DateTime, Utc};
use mockall::mock;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;
use taskboard::api::router;
use taskboard::task::domain::{NewTask, Task, TaskId, TaskPatch, TaskStatus};
use taskboard::task::ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

mock! {
    pub Repository {}

    #[async_trait]
    impl TaskRepository for Repository {
        async fn insert(
            &self,
            task: &NewTask,
            created_at: DateTime<Utc>,
        ) -> TaskRepositoryResult<Task>;
        async fn update(
            &self,
            id: TaskId,
            patch: TaskPatch,
            updated_at: DateTime<Utc>,
        ) -> TaskRepositoryResult<Task>;
        async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool>;
        async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
        async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;
        async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;
    }
}

fn outage() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("connection refused"))
}

fn failing_repository() -> MockRepository {
    let mut repository = MockRepository::new();
    repository.expect_insert().returning(|_, _| Err(outage()));
    repository.expect_update().returning(|_, _, _| Err(outage()));
    repository.expect_find_by_id().returning(|_| Err(outage()));
    repository.expect_exists().returning(|_| Err(outage()));
    repository.expect_delete().returning(|_| Err(outage()));
    repository.expect_find_all().returning(|| Err(outage()));
    repository.expect_find_by_status().returning(|_| Err(outage()));
    repository
}

#[rstest]
#[case::list(Call::new(Method::GET, "/api/tasks"))]
#[case::filtered_list(Call::new(Method::GET, "/api/tasks?status=PENDING"))]
#[case::get(Call::new(Method::GET, "/api/tasks/1"))]
#[case::create(Call::new(Method::POST, "/api/tasks").json(&json!({"title": "x"})))]
#[case::update(Call::new(Method::PUT, "/api/tasks/1").json(&json!({"title": "x"})))]
#[case::delete(Call::new(Method::DELETE, "/api/tasks/1"))]
#[tokio::test(flavor = "multi_thread")]
async fn store_failure_is_an_unexpected_error(#[case] call: Call) -> Result<(), eyre::Report> {
    let app = router(state_over(Arc::new(failing_repository())));

    let response = call.send(&app).await?;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text(),
        "Unexpected error: persistence error: connection refused"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn anonymous_callers_never_reach_the_store() -> Result<(), eyre::Report> {
    let mut repository = MockRepository::new();
    repository.expect_find_all().never();
    let app = router(state_over(Arc::new(repository)));

    let response = Call::new(Method::GET, "/api/tasks")
        .authorization(None)
        .send(&app)
        .await?;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    Ok(())
}
