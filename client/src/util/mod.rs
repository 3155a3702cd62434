//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the theme core can be exercised natively in tests.

pub mod class_names;
pub mod theme_marker;
pub mod theme_storage;
