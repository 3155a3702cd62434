//! REST helpers for the page's two server endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` so sections can turn them into view
//! state. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactSubmission, Project};

pub const PROJECTS_ENDPOINT: &str = "/api/projects";
pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.trim().is_empty() => format!("{what} failed ({status}): {}", detail.trim()),
        _ => format!("{what} failed ({status})"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<super::types::ApiErrorBody>(body)
        .ok()
        .map(|b| b.error)
}

/// Fetch the project list from `GET /api/projects`, ordered by id.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a project list.
pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PROJECTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let detail = resp.text().await.ok().and_then(|body| error_detail(&body));
            return Err(request_failed_message("projects request", resp.status(), detail.as_deref()));
        }
        resp.json::<Vec<Project>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Send a contact submission via `POST /api/contact`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn submit_contact(submission: &ContactSubmission) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(submission)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let detail = resp.text().await.ok().and_then(|body| error_detail(&body));
            return Err(request_failed_message("contact submission", resp.status(), detail.as_deref()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err("not available on server".to_owned())
    }
}
