//! Page sections and the small widgets they share.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections read the page-wide theme from context and keep any other state
//! local to themselves.

pub mod about_services;
pub mod button;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod projects;
pub mod tech_stack;
pub mod theme_toggle;
