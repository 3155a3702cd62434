//! Contact submissions: validation and the outbound form relay.
//!
//! DESIGN
//! ======
//! Validation reuses the page's own field rules so the browser and server
//! reject the same input, then adds length caps the browser does not enforce.
//! The relay is a Formspree-style endpoint that accepts one JSON POST per
//! message; only its status code is inspected.

use portfolio_client::net::types::ContactSubmission;
use portfolio_client::state::contact::validate;

use crate::config::HttpTimeouts;
use crate::services::projects::build_http_client;

pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_EMAIL_CHARS: usize = 320;
pub const MAX_MESSAGE_CHARS: usize = 5000;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Reasons a submission is rejected before reaching the relay.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(String),
    #[error("relay request failed: {0}")]
    Request(String),
    #[error("relay responded with status {0}")]
    Status(u16),
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Trim and check a submission. Returns the cleaned copy to forward.
///
/// # Errors
///
/// Returns [`ContactError::Invalid`] for blank fields or a malformed email and
/// [`ContactError::TooLong`] when a field exceeds its cap.
pub fn validate_submission(raw: &ContactSubmission) -> Result<ContactSubmission, ContactError> {
    let submission = validate(raw).map_err(ContactError::Invalid)?;
    check_length("name", &submission.name, MAX_NAME_CHARS)?;
    check_length("email", &submission.email, MAX_EMAIL_CHARS)?;
    check_length("message", &submission.message, MAX_MESSAGE_CHARS)?;
    Ok(submission)
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ContactError> {
    if value.chars().count() > max {
        return Err(ContactError::TooLong { field, max });
    }
    Ok(())
}

// =============================================================================
// RELAY
// =============================================================================

#[async_trait::async_trait]
pub trait FormRelay: Send + Sync {
    /// Deliver one validated submission.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] if the relay is unreachable or answers with a
    /// non-success status.
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), RelayError>;
}

pub struct HttpFormRelay {
    http: reqwest::Client,
    url: String,
}

impl HttpFormRelay {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: String, timeouts: HttpTimeouts) -> Result<Self, RelayError> {
        let http = build_http_client(timeouts.request, timeouts.connect)
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }
}

#[async_trait::async_trait]
impl FormRelay for HttpFormRelay {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        let response = self
            .http
            .post(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(submission)
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
