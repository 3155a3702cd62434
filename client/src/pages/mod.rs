//! Route-level screens.

pub mod home;
