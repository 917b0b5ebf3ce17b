//! Local UI chrome state (theme mirror, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of content state so header
//! controls can evolve independently of fetched data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::theme::ResolvedTheme;

/// UI state shared through Leptos context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Theme applied by the synchronizer. `None` until the header mounts in
    /// a browser, which also keeps the toggle icon out of the server render.
    pub theme: Option<ResolvedTheme>,
    pub mobile_menu_open: bool,
}

impl UiState {
    /// `true` once the theme synchronizer has mounted.
    #[must_use]
    pub fn theme_ready(&self) -> bool {
        self.theme.is_some()
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_some_and(ResolvedTheme::is_dark)
    }
}
