//! Collaborators behind the HTTP API.
//!
//! ARCHITECTURE
//! ============
//! Each service hides one outbound dependency behind an async trait so route
//! handlers stay focused on status mapping and tests can swap in fakes.

pub mod contact;
pub mod projects;
