//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the project source, the optional form relay, and the contact rate
//! limiter. Everything is `Arc`-wrapped so cloning per request is cheap.

use std::sync::Arc;

use crate::config::{ContactLimits, SiteConfig};
use crate::rate_limit::RateLimiter;
use crate::services::contact::{FormRelay, HttpFormRelay, RelayError};
use crate::services::projects::{ProjectSource, ProjectsError, StaticProjects, SupabaseProjects};

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Projects(#[from] ProjectsError),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn ProjectSource>,
    /// Form relay. `None` when `CONTACT_RELAY_URL` is not configured.
    pub relay: Option<Arc<dyn FormRelay>>,
    pub contact_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(
        projects: Arc<dyn ProjectSource>,
        relay: Option<Arc<dyn FormRelay>>,
        contact_limits: ContactLimits,
    ) -> Self {
        Self { projects, relay, contact_limiter: RateLimiter::new(contact_limits) }
    }

    /// Wire real collaborators from parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built or the bundled
    /// catalog is malformed.
    pub fn from_config(config: &SiteConfig) -> Result<Self, StateError> {
        let projects: Arc<dyn ProjectSource> = match &config.supabase {
            Some(supabase) => {
                tracing::info!(table = %supabase.table, "serving projects from supabase");
                Arc::new(SupabaseProjects::new(supabase.clone(), config.timeouts)?)
            }
            None => {
                tracing::info!("supabase not configured; serving bundled project catalog");
                Arc::new(StaticProjects::bundled()?)
            }
        };

        let relay: Option<Arc<dyn FormRelay>> = match &config.contact_relay_url {
            Some(url) => Some(Arc::new(HttpFormRelay::new(url.clone(), config.timeouts)?)),
            None => {
                tracing::warn!("CONTACT_RELAY_URL not set; contact form disabled");
                None
            }
        };

        Ok(Self::new(projects, relay, config.contact_limits))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;
    use std::time::Duration;

    use portfolio_client::net::types::{ContactSubmission, Project};

    use super::*;

    pub const TEST_LIMITS: ContactLimits =
        ContactLimits { per_client: 2, global: 10, window: Duration::from_secs(60) };

    /// Project source returning a fixed result.
    pub struct FakeProjects {
        pub result: Result<Vec<Project>, u16>,
    }

    #[async_trait::async_trait]
    impl ProjectSource for FakeProjects {
        async fn list(&self) -> Result<Vec<Project>, ProjectsError> {
            self.result
                .clone()
                .map_err(|status| ProjectsError::Status { status, body: String::new() })
        }
    }

    /// Relay that records deliveries and optionally fails with a status.
    #[derive(Default)]
    pub struct FakeRelay {
        pub fail_with: Option<u16>,
        pub delivered: Mutex<Vec<ContactSubmission>>,
    }

    impl FakeRelay {
        pub fn delivered(&self) -> Vec<ContactSubmission> {
            self.delivered.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl FormRelay for FakeRelay {
        async fn deliver(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
            if let Some(status) = self.fail_with {
                return Err(RelayError::Status(status));
            }
            self.delivered.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }

    #[must_use]
    pub fn sample_project(id: i64) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: "A sample project".into(),
            tags: vec!["Rust".into()],
            github_url: format!("https://github.com/example/{id}"),
            live_url: format!("https://example.dev/{id}"),
            image: format!("/projects/{id}.png"),
        }
    }

    /// Serve `router` on an ephemeral loopback port; returns its base URL.
    pub async fn serve_router(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service_with_connect_info::<std::net::SocketAddr>())
                .await
                .unwrap();
        });
        format!("http://{addr}")
    }

    /// State with fixed projects and no relay.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let projects = FakeProjects { result: Ok(vec![sample_project(1), sample_project(2)]) };
        AppState::new(Arc::new(projects), None, TEST_LIMITS)
    }

    /// State with fixed projects and the given relay.
    #[must_use]
    pub fn test_app_state_with_relay(relay: Arc<FakeRelay>) -> AppState {
        let projects = FakeProjects { result: Ok(vec![sample_project(1)]) };
        AppState::new(Arc::new(projects), Some(relay as Arc<dyn FormRelay>), TEST_LIMITS)
    }
}
