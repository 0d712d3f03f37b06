//! OpenAPI documentation endpoints.

use super::ApiError;
use axum::Json;
use axum::http::header;
use axum::response::IntoResponse;
use serde_json::Value;

/// OpenAPI 3 description of the HTTP surface.
pub const OPENAPI_YAML: &str = include_str!("../../openapi/openapi.yaml");

/// Parses [`OPENAPI_YAML`] into a JSON value.
///
/// # Errors
///
/// Returns the YAML parse error when the embedded document is malformed.
pub fn openapi_document() -> Result<Value, serde_yaml::Error> {
    serde_yaml::from_str(OPENAPI_YAML)
}

pub(super) async fn openapi_json() -> Result<Json<Value>, ApiError> {
    openapi_document()
        .map(Json)
        .map_err(|err| ApiError::Internal(err.to_string()))
}

pub(super) async fn openapi_yaml() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/yaml; charset=utf-8")],
        OPENAPI_YAML,
    )
}
