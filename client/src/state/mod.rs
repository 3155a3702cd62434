//! Client-side state models.
//!
//! DESIGN
//! ======
//! `theme` is page-wide and provided through context. `projects` and
//! `contact` are local to their sections and live only as long as the
//! section is mounted.

pub mod contact;
pub mod projects;
pub mod theme;
