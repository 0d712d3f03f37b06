//! Route handlers for task CRUD.
//!
//! Handlers stay thin: they extract input, delegate to the task service and
//! let [`ApiError`] pick the status code.

use super::{ApiError, AppState};
use crate::task::{
    domain::TaskId,
    services::{TaskListQuery, TaskRequest, TaskResponse},
};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Serialize;

type TaskPayload = Result<Json<TaskRequest>, JsonRejection>;
type TaskPath = Result<Path<i64>, PathRejection>;

fn task_id(path: TaskPath) -> Result<TaskId, ApiError> {
    let Path(raw) = path.map_err(|rejection| ApiError::from_path_rejection(&rejection))?;
    Ok(TaskId::new(raw))
}

fn task_request(payload: TaskPayload) -> Result<TaskRequest, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::from_json_rejection(&rejection))?;
    Ok(request)
}

pub(super) async fn create_task(
    State(state): State<AppState>,
    payload: TaskPayload,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let request = task_request(payload)?;
    let created = state.service().create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub(super) async fn get_task(
    State(state): State<AppState>,
    path: TaskPath,
) -> Result<Json<TaskResponse>, ApiError> {
    let id = task_id(path)?;
    Ok(Json(state.service().get_by_id(id).await?))
}

pub(super) async fn list_tasks(
    State(state): State<AppState>,
    query: Result<Query<TaskListQuery>, QueryRejection>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let Query(params) = query.map_err(|rejection| ApiError::from_query_rejection(&rejection))?;
    Ok(Json(state.service().list(params).await?))
}

pub(super) async fn update_task(
    State(state): State<AppState>,
    path: TaskPath,
    payload: TaskPayload,
) -> Result<Json<TaskResponse>, ApiError> {
    let id = task_id(path)?;
    let request = task_request(payload)?;
    Ok(Json(state.service().update(id, request).await?))
}

pub(super) async fn delete_task(
    State(state): State<AppState>,
    path: TaskPath,
) -> Result<StatusCode, ApiError> {
    let id = task_id(path)?;
    state.service().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
}

pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub(super) async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
