//! Server configuration parsed from environment variables.
//!
//! Required: nothing. Every collaborator is optional:
//! - `SUPABASE_URL` + `SUPABASE_ANON_KEY`: project table (both or neither);
//!   the bundled catalog is served when unset
//! - `SUPABASE_PROJECTS_TABLE`: default `projects`
//! - `CONTACT_RELAY_URL`: form relay endpoint; contact is disabled when unset
//!
//! Optional tuning:
//! - `PORT`: default 3000
//! - `HTTP_REQUEST_TIMEOUT_SECS`: default 15
//! - `HTTP_CONNECT_TIMEOUT_SECS`: default 5
//! - `CONTACT_RATE_LIMIT_PER_CLIENT`: default 5
//! - `CONTACT_RATE_LIMIT_GLOBAL`: default 60
//! - `CONTACT_RATE_LIMIT_WINDOW_SECS`: default 600

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROJECTS_TABLE: &str = "projects";
pub const DEFAULT_HTTP_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_CONTACT_PER_CLIENT_LIMIT: usize = 5;
pub const DEFAULT_CONTACT_GLOBAL_LIMIT: usize = 60;
pub const DEFAULT_CONTACT_WINDOW_SECS: u64 = 600;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{set} is set but {missing} is not; configure both or neither")]
    IncompletePair { set: &'static str, missing: &'static str },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Connection details for the remote project table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLimits {
    pub per_client: usize,
    pub global: usize,
    pub window: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub supabase: Option<SupabaseConfig>,
    pub contact_relay_url: Option<String>,
    pub timeouts: HttpTimeouts,
    pub contact_limits: ContactLimits,
}

impl SiteConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when only half of the Supabase pair is set or a
    /// required-looking value is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`SiteConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned());

        let supabase = match (var("SUPABASE_URL"), var("SUPABASE_ANON_KEY")) {
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::IncompletePair { set: "SUPABASE_URL", missing: "SUPABASE_ANON_KEY" });
            }
            (None, Some(_)) => {
                return Err(ConfigError::IncompletePair { set: "SUPABASE_ANON_KEY", missing: "SUPABASE_URL" });
            }
            (Some(url), Some(anon_key)) => {
                if url.is_empty() {
                    return Err(ConfigError::Empty { var: "SUPABASE_URL" });
                }
                if anon_key.is_empty() {
                    return Err(ConfigError::Empty { var: "SUPABASE_ANON_KEY" });
                }
                let table = var("SUPABASE_PROJECTS_TABLE")
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| DEFAULT_PROJECTS_TABLE.to_owned());
                Some(SupabaseConfig { url: url.trim_end_matches('/').to_owned(), anon_key, table })
            }
        };

        let contact_relay_url = var("CONTACT_RELAY_URL").filter(|u| !u.is_empty());

        let timeouts = HttpTimeouts {
            request: Duration::from_secs(parse_or(
                var("HTTP_REQUEST_TIMEOUT_SECS"),
                DEFAULT_HTTP_REQUEST_TIMEOUT_SECS,
            )),
            connect: Duration::from_secs(parse_or(
                var("HTTP_CONNECT_TIMEOUT_SECS"),
                DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
            )),
        };

        let contact_limits = ContactLimits {
            per_client: parse_or(var("CONTACT_RATE_LIMIT_PER_CLIENT"), DEFAULT_CONTACT_PER_CLIENT_LIMIT),
            global: parse_or(var("CONTACT_RATE_LIMIT_GLOBAL"), DEFAULT_CONTACT_GLOBAL_LIMIT),
            window: Duration::from_secs(parse_or(var("CONTACT_RATE_LIMIT_WINDOW_SECS"), DEFAULT_CONTACT_WINDOW_SECS)),
        };

        Ok(Self {
            port: parse_or(var("PORT"), DEFAULT_PORT),
            supabase,
            contact_relay_url,
            timeouts,
            contact_limits,
        })
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.parse::<T>().ok()).unwrap_or(default)
}
