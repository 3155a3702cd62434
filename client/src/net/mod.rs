//! Network layer: wire types shared with the server and browser HTTP helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page talks only to its own server. The server fronts the project
//! table and the contact relay, so these helpers never see third-party URLs
//! or credentials.

pub mod api;
pub mod types;
