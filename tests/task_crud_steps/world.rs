//! Shared world state for task CRUD BDD scenarios.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rstest::fixture;
use serde_json::Value;
use taskboard::api::{AppState, BasicCredentials, router};
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use tower::ServiceExt;

const BODY_LIMIT: usize = 1024 * 1024;

/// Response captured by the latest step.
pub struct CapturedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedResponse {
    /// Parses the captured body as JSON.
    pub fn json(&self) -> Result<Value, eyre::Report> {
        serde_json::from_slice(&self.body).map_err(|err| eyre::eyre!("body is not JSON: {err}"))
    }
}

/// Scenario world for task CRUD behaviour tests.
pub struct TaskWorld {
    pub app: Router,
    pub current_task_id: Option<i64>,
    pub last_response: Option<CapturedResponse>,
}

impl TaskWorld {
    /// Creates a world around an empty in-memory task board.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::with_repository(
            Arc::new(InMemoryTaskRepository::new()),
            BasicCredentials::new("admin", "admin"),
        );
        Self {
            app: router(state),
            current_task_id: None,
            last_response: None,
        }
    }

    /// Sends a request as the configured user and records the response.
    pub fn send(
        &mut self,
        method: Method,
        uri: &str,
        payload: Option<&Value>,
    ) -> Result<(), eyre::Report> {
        let credentials = format!("Basic {}", STANDARD.encode("admin:admin"));
        self.send_with(method, uri, payload, Some(credentials))
    }

    /// Sends a request with an optional authorization header value.
    pub fn send_with(
        &mut self,
        method: Method,
        uri: &str,
        payload: Option<&Value>,
        authorization: Option<String>,
    ) -> Result<(), eyre::Report> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let body = match payload {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(body)?;

        let app = self.app.clone();
        let captured = run_async(async move {
            let response = app.oneshot(request).await?;
            let status = response.status();
            let headers = response.headers().clone();
            let bytes = to_bytes(response.into_body(), BODY_LIMIT).await?;
            Ok::<_, eyre::Report>(CapturedResponse {
                status,
                headers,
                body: bytes,
            })
        })?;
        self.last_response = Some(captured);
        Ok(())
    }

    /// Returns the latest captured response.
    pub fn response(&self) -> Result<&CapturedResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no response captured in scenario world"))
    }

    /// Returns the task the scenario is working on.
    pub fn task_uri(&self) -> Result<String, eyre::Report> {
        let id = self
            .current_task_id
            .ok_or_else(|| eyre::eyre!("no task created in scenario world"))?;
        Ok(format!("/api/tasks/{id}"))
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
