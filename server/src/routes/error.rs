//! JSON error responses for the API routes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portfolio_client::net::types::ApiErrorBody;

use crate::rate_limit::RateLimitError;
use crate::services::contact::{ContactError, RelayError};
use crate::services::projects::ProjectsError;

/// An error status plus the message rendered as `{ "error": message }`.
#[derive(Debug, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    #[must_use]
    pub fn relay_unavailable() -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, "contact form is not configured")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiErrorBody { error: self.message })).into_response()
    }
}

impl From<ProjectsError> for ApiError {
    fn from(err: ProjectsError) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, err.to_string())
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, err.to_string())
    }
}

impl From<RateLimitError> for ApiError {
    fn from(err: RateLimitError) -> Self {
        Self::new(StatusCode::TOO_MANY_REQUESTS, err.to_string())
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        // Relay internals stay in the server log.
        tracing::warn!(error = %err, "contact relay failed");
        Self::new(StatusCode::BAD_GATEWAY, "message could not be delivered")
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
