//! Project catalog sources.
//!
//! DESIGN
//! ======
//! `SupabaseProjects` reads the remote table through PostgREST; when no
//! table is configured `StaticProjects` serves the catalog bundled into the
//! binary. Both hand back records ordered by ascending `id`.

use std::time::Duration;

use portfolio_client::net::types::Project;

use crate::config::{HttpTimeouts, SupabaseConfig};

/// Catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/projects.json");

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProjectsError {
    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(String),
    #[error("project request failed: {0}")]
    Request(String),
    #[error("project table responded with status {status}")]
    Status { status: u16, body: String },
    #[error("malformed project data: {0}")]
    Parse(String),
}

impl ProjectsError {
    /// Response body from a non-success upstream reply, if any.
    #[must_use]
    pub fn upstream_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } if !body.trim().is_empty() => Some(body.trim()),
            _ => None,
        }
    }
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

#[async_trait::async_trait]
pub trait ProjectSource: Send + Sync {
    /// Return every project, ascending by `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`ProjectsError`] if the backing store cannot be reached or
    /// returns something that is not a project list.
    async fn list(&self) -> Result<Vec<Project>, ProjectsError>;
}

// =============================================================================
// SUPABASE
// =============================================================================

pub struct SupabaseProjects {
    http: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseProjects {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: SupabaseConfig, timeouts: HttpTimeouts) -> Result<Self, ProjectsError> {
        let http = build_http_client(timeouts.request, timeouts.connect)
            .map_err(|e| ProjectsError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self) -> String {
        table_url(&self.config.url, &self.config.table)
    }
}

#[async_trait::async_trait]
impl ProjectSource for SupabaseProjects {
    async fn list(&self) -> Result<Vec<Project>, ProjectsError> {
        let response = self
            .http
            .get(self.endpoint())
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ProjectsError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ProjectsError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(ProjectsError::Status { status, body: text });
        }

        parse_projects(&text)
    }
}

// =============================================================================
// BUNDLED CATALOG
// =============================================================================

pub struct StaticProjects {
    projects: Vec<Project>,
}

impl StaticProjects {
    /// # Errors
    ///
    /// Returns an error if the bundled catalog is malformed.
    pub fn bundled() -> Result<Self, ProjectsError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// # Errors
    ///
    /// Returns an error if `json` is not a project list.
    pub fn from_json(json: &str) -> Result<Self, ProjectsError> {
        Ok(Self { projects: parse_projects(json)? })
    }
}

#[async_trait::async_trait]
impl ProjectSource for StaticProjects {
    async fn list(&self) -> Result<Vec<Project>, ProjectsError> {
        Ok(self.projects.clone())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

pub(crate) fn build_http_client(request: Duration, connect: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(request)
        .connect_timeout(connect)
        .build()
}

/// PostgREST query for every row of `table`, ascending by id.
fn table_url(base: &str, table: &str) -> String {
    format!("{}/rest/v1/{table}?select=*&order=id.asc", base.trim_end_matches('/'))
}

fn parse_projects(json: &str) -> Result<Vec<Project>, ProjectsError> {
    let mut projects: Vec<Project> = serde_json::from_str(json).map_err(|e| ProjectsError::Parse(e.to_string()))?;
    // The bundled file and table views carry no ordering guarantee.
    projects.sort_by_key(|p| p.id);
    Ok(projects)
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
