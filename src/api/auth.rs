//! HTTP Basic authentication for task routes.

use super::AppState;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::{Engine as _, engine::general_purpose};
use sha2::{Digest, Sha256};
use std::fmt;
use tracing::debug;

/// Challenge sent with `401 Unauthorized` responses.
pub const BASIC_CHALLENGE: &str = r#"Basic realm="tasks""#;

/// The single accepted username/password pair.
///
/// Only a SHA-256 digest of `username:password` is kept, and presented
/// credentials are compared digest to digest so the comparison time does not
/// depend on the credential length.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    digest: [u8; 32],
}

impl BasicCredentials {
    /// Creates the accepted credential pair.
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(username.as_bytes());
        hasher.update(b":");
        hasher.update(password.as_bytes());
        Self {
            digest: hasher.finalize().into(),
        }
    }

    /// Checks an `Authorization` header value.
    ///
    /// The scheme name is matched case-insensitively. Malformed values are
    /// rejected.
    #[must_use]
    pub fn verify_header(&self, header_value: &str) -> bool {
        let Some((scheme, encoded)) = header_value.trim().split_once(' ') else {
            return false;
        };
        if !scheme.eq_ignore_ascii_case("basic") {
            return false;
        }
        let Ok(decoded) = general_purpose::STANDARD.decode(encoded.trim()) else {
            return false;
        };
        let presented: [u8; 32] = Sha256::digest(&decoded).into();
        digests_match(&presented, &self.digest)
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("digest", &"<redacted>")
            .finish()
    }
}

fn digests_match(left: &[u8; 32], right: &[u8; 32]) -> bool {
    left.iter()
        .zip(right.iter())
        .fold(0_u8, |acc, (lhs, rhs)| acc | (lhs ^ rhs))
        == 0
}

/// Middleware rejecting requests without valid Basic credentials.
pub(super) async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorised = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| state.credentials().verify_header(value));

    if authorised {
        return next.run(request).await;
    }

    debug!("rejecting request without valid credentials");
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, BASIC_CHALLENGE)],
    )
        .into_response()
}
