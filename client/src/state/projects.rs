//! Projects gallery request state.
//!
//! The gallery issues exactly one fetch per mount. The result is assigned
//! once; a failure stays a failure until the section is mounted again.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::Project;

/// Tri-state result of the one-shot project fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProjectsState {
    #[default]
    Loading,
    Failed(String),
    Loaded(Vec<Project>),
}

impl ProjectsState {
    /// Convert a fetch outcome into view state.
    #[must_use]
    pub fn from_fetch(result: Result<Vec<Project>, String>) -> Self {
        match result {
            Ok(projects) => Self::Loaded(projects),
            Err(reason) => Self::Failed(format!("Could not load projects: {reason}")),
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Odd-indexed cards put the image on the left.
#[must_use]
pub fn is_reversed(index: usize) -> bool {
    index % 2 != 0
}
