//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `posts`, `ui`) so individual
//! components can depend on small focused models.

pub mod posts;
pub mod projects;
pub mod theme;
pub mod ui;
