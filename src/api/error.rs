//! Translation of service failures into HTTP responses.

use crate::task::services::TaskServiceError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error};

/// Fixed body returned when a JSON payload cannot be parsed.
pub const MALFORMED_BODY_MESSAGE: &str =
    "Invalid value for 'status'. Allowed values: PENDING, IN_PROGRESS, COMPLETED";

/// Failures surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The task service rejected the operation.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
    /// The JSON body could not be parsed into the expected shape.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    /// The body could not be read, for example because it exceeds the
    /// configured size cap.
    #[error("{message}")]
    UnreadableBody {
        /// Status chosen by the body extractor (`413` for oversized bodies).
        status: StatusCode,
        /// Extractor message.
        message: String,
    },
    /// A path segment or query string could not be parsed.
    #[error("{0}")]
    MalformedRequest(String),
    /// The body was not declared as JSON.
    #[error("{0}")]
    UnsupportedMediaType(String),
    /// Any other failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Classifies a JSON extractor rejection.
    #[must_use]
    pub fn from_json_rejection(rejection: &JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                Self::UnsupportedMediaType(rejection.body_text())
            }
            JsonRejection::BytesRejection(_) => Self::UnreadableBody {
                status: rejection.status(),
                message: rejection.body_text(),
            },
            _ => Self::MalformedBody(rejection.body_text()),
        }
    }

    /// Classifies a path extractor rejection.
    #[must_use]
    pub fn from_path_rejection(rejection: &PathRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }

    /// Classifies a query extractor rejection.
    #[must_use]
    pub fn from_query_rejection(rejection: &QueryRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Service(TaskServiceError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Task not found").into_response()
            }
            Self::Service(TaskServiceError::Validation(errors)) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            Self::Service(TaskServiceError::Repository(err)) => {
                error!(error = %err, "task repository failure");
                unexpected(&err)
            }
            Self::MalformedBody(detail) => {
                debug!(%detail, "rejecting malformed body");
                (StatusCode::BAD_REQUEST, MALFORMED_BODY_MESSAGE).into_response()
            }
            Self::UnreadableBody { status, message } => {
                debug!(%status, %message, "rejecting unreadable body");
                (status, message).into_response()
            }
            Self::MalformedRequest(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            Self::UnsupportedMediaType(message) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, message).into_response()
            }
            Self::Internal(message) => {
                error!(error = %message, "internal failure");
                unexpected(&message)
            }
        }
    }
}

fn unexpected(cause: &dyn std::fmt::Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Unexpected error: {cause}"),
    )
        .into_response()
}
