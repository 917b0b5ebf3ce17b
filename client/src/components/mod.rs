//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and listing cards while reading/writing
//! shared state from Leptos context providers.

pub mod article_card;
pub mod container;
pub mod header;
pub mod mobile_menu;
pub mod project_card;
