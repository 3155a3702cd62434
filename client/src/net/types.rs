//! Wire types exchanged between the page and the server.
//!
//! The server reuses these definitions when decoding the remote project table
//! and when accepting contact submissions, so both sides agree on field names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One portfolio project card.
///
/// Serialized camelCase. Snake-case column names from the project table are
/// accepted as aliases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(alias = "github_url")]
    pub github_url: String,
    #[serde(alias = "live_url")]
    pub live_url: String,
    pub image: String,
}

/// Contact form payload for `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Error body returned by the JSON endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
