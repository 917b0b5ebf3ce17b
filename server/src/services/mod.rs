//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own content loading and indexing so route handlers can
//! stay focused on protocol translation.

pub mod content;
