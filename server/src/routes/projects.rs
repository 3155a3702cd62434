//! Project catalog route.

use axum::Json;
use axum::extract::State;
use portfolio_client::net::types::Project;

use super::error::ApiError;
use crate::state::AppState;

/// `GET /api/projects`: every project, ascending by id.
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    match state.projects.list().await {
        Ok(projects) => Ok(Json(projects)),
        Err(e) => {
            tracing::warn!(error = %e, upstream_body = e.upstream_body().unwrap_or(""), "project listing failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
