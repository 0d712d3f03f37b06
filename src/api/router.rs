//! Router assembly and shared handler state.

use super::auth::{BasicCredentials, require_basic_auth};
use super::docs::{openapi_json, openapi_yaml};
use super::handlers::{
    create_task, delete_task, get_task, health, list_tasks, not_found, update_task,
};
use super::trace::trace_requests;
use crate::task::{ports::TaskRepository, services::TaskService};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::get;
use mockable::DefaultClock;
use std::sync::Arc;

/// Task service with the repository chosen at runtime.
pub type SharedTaskService = TaskService<dyn TaskRepository, DefaultClock>;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    service: SharedTaskService,
    credentials: Arc<BasicCredentials>,
    body_limit: Option<usize>,
}

impl AppState {
    /// Creates handler state from a service and the accepted credentials.
    #[must_use]
    pub fn new(service: SharedTaskService, credentials: BasicCredentials) -> Self {
        Self {
            service,
            credentials: Arc::new(credentials),
            body_limit: None,
        }
    }

    /// Caps request bodies at `bytes`; without a cap bodies are unbounded.
    #[must_use]
    pub const fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit = Some(bytes);
        self
    }

    /// Creates handler state around a repository using the system clock.
    #[must_use]
    pub fn with_repository(
        repository: Arc<dyn TaskRepository>,
        credentials: BasicCredentials,
    ) -> Self {
        Self::new(
            TaskService::new(repository, Arc::new(DefaultClock)),
            credentials,
        )
    }

    /// Returns the task service.
    #[must_use]
    pub const fn service(&self) -> &SharedTaskService {
        &self.service
    }

    /// Returns the accepted credentials.
    #[must_use]
    pub fn credentials(&self) -> &BasicCredentials {
        &self.credentials
    }

    /// Returns the request body cap, if any.
    #[must_use]
    pub const fn body_limit(&self) -> Option<usize> {
        self.body_limit
    }
}

/// Builds the complete application router.
///
/// Only the OpenAPI documents are public. Every other path, including
/// unknown ones, answers `401` before routing when credentials are missing.
#[must_use]
pub fn router(state: AppState) -> Router {
    let body_limit = state
        .body_limit()
        .map_or_else(DefaultBodyLimit::disable, DefaultBodyLimit::max);

    let tasks = Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .layer(body_limit);

    let protected = Router::new()
        .nest("/api", tasks)
        .route("/health", get(health))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ));

    Router::new()
        .route("/v3/api-docs", get(openapi_json))
        .route("/v3/api-docs.yaml", get(openapi_yaml))
        .merge(protected)
        .layer(middleware::from_fn(trace_requests))
        .with_state(state)
}
