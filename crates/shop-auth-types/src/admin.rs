//! Static shared-secret gate for catalog administration.

use std::fmt;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::header::AUTHORIZATION;
use http::request::Parts;

/// The configured admin secret. Lives in application state and is handed to
/// [`AdminOnly`] through `FromRef`.
#[derive(Clone)]
pub struct AdminSecret(Arc<str>);

impl AdminSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Arc::from(secret.into()))
    }

    pub fn is_configured(&self) -> bool {
        !self.0.is_empty()
    }

    /// Compares every byte so timing does not reveal the mismatch position.
    pub fn matches(&self, presented: &[u8]) -> bool {
        let expected = self.0.as_bytes();
        if expected.len() != presented.len() {
            return false;
        }
        expected
            .iter()
            .zip(presented)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminSecret(***)")
    }
}

/// Why the admin gate turned a request away. Renders the same
/// `{"kind", "message"}` body as service errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdminRejection {
    #[error("admin secret required")]
    Unauthorized,
    #[error("admin access is not configured")]
    Unconfigured,
}

impl AdminRejection {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Unconfigured => "ADMIN_UNCONFIGURED",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Unconfigured => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (self.status(), axum::Json(body)).into_response()
    }
}

/// Proof that the request carried `Authorization: <admin secret>`.
///
/// Rejects with [`AdminRejection::Unauthorized`] (401) when the header is
/// absent or differs, and with [`AdminRejection::Unconfigured`] (500) when the
/// service was started with an empty secret.
#[derive(Debug, Clone, Copy)]
pub struct AdminOnly;

impl<S> FromRequestParts<S> for AdminOnly
where
    AdminSecret: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    // Read everything synchronously and return a 'static future; see the
    // axum-core 0.5 `FromRequestParts` signature.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = AdminSecret::from_ref(state);
        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .map(|v| v.as_bytes().to_vec());

        async move {
            if !secret.is_configured() {
                tracing::error!("admin secret is empty; refusing admin request");
                return Err(AdminRejection::Unconfigured);
            }
            match presented {
                Some(value) if secret.matches(&value) => Ok(Self),
                _ => Err(AdminRejection::Unauthorized),
            }
        }
    }
}
