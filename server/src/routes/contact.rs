//! Contact form route.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use portfolio_client::net::types::ContactSubmission;

use super::error::ApiError;
use crate::services::contact::validate_submission;
use crate::state::AppState;

/// `POST /api/contact`: validate, rate-limit, then forward to the relay.
///
/// Responds `204` once the relay accepts the message.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    body: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(raw) = body.map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.body_text()))?;
    let submission = validate_submission(&raw)?;

    let Some(relay) = state.relay.as_ref() else {
        return Err(ApiError::relay_unavailable());
    };

    if let Err(e) = state.contact_limiter.check_and_record(peer.ip()) {
        tracing::info!(client = %peer.ip(), error = %e, "contact submission rate limited");
        return Err(e.into());
    }

    relay.deliver(&submission).await?;
    tracing::info!(client = %peer.ip(), "contact submission relayed");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
