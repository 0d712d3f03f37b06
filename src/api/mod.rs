//! HTTP surface of the task board.
//!
//! Task routes live under `/api` and require HTTP Basic credentials. The
//! OpenAPI document (`/v3/api-docs`, `/v3/api-docs.yaml`) and the liveness
//! probe (`/health`) are public.

mod auth;
mod docs;
mod error;
mod handlers;
mod router;
mod trace;

pub use auth::{BASIC_CHALLENGE, BasicCredentials};
pub use docs::{OPENAPI_YAML, openapi_document};
pub use error::{ApiError, MALFORMED_BODY_MESSAGE};
pub use router::{AppState, SharedTaskService, router};
