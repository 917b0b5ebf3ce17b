//! Browser collaborators for the theme synchronizer.
//!
//! Reads the user's preference from `localStorage`, toggles the `dark` class
//! on the `<html>` element, and queries `prefers-color-scheme`. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR and test
//! builds compile every adapter to a no-op so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{
    ColorSchemeQuery, DarkMarkerSink, PreferenceStore, ResolvedTheme, ThemePreference, ThemeSynchronizer,
};

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Class on `<html>` that styling rules key off.
pub const DARK_CLASS: &str = "dark";

/// Media query consulted when no preference is stored.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Synchronizer wired to the real browser.
pub type BrowserThemeSynchronizer = ThemeSynchronizer<LocalStorageStore, DocumentRootMarker, SystemColorScheme>;

/// Build a synchronizer over the browser collaborators.
#[must_use]
pub fn browser_synchronizer() -> BrowserThemeSynchronizer {
    ThemeSynchronizer::new(LocalStorageStore, DocumentRootMarker, SystemColorScheme)
}

/// Failure reaching `localStorage`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeStorageError {
    /// Not running in a browser window.
    #[error("no browser window")]
    NoWindow,
    /// Storage is disabled or denied (private mode, sandboxed iframe).
    #[error("localStorage unavailable")]
    Unavailable,
    /// The storage call itself threw (quota, security error).
    #[error("localStorage access failed: {0}")]
    Access(String),
}

/// [`PreferenceStore`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    /// Raw stored value, surfacing why storage could not be read.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeStorageError`] when storage is missing or throws.
    pub fn try_read(&self) -> Result<Option<String>, ThemeStorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage
                .get_item(STORAGE_KEY)
                .map_err(|e| ThemeStorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ThemeStorageError::NoWindow)
        }
    }

    /// Persist `theme`, surfacing storage failures.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeStorageError`] when storage is missing or throws.
    pub fn try_write(&self, theme: ResolvedTheme) -> Result<(), ThemeStorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage
                .set_item(STORAGE_KEY, theme.as_str())
                .map_err(|e| ThemeStorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
            Err(ThemeStorageError::NoWindow)
        }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn read(&self) -> ThemePreference {
        match self.try_read() {
            Ok(raw) => ThemePreference::from_stored(raw.as_deref()),
            Err(_e) => {
                #[cfg(feature = "hydrate")]
                log::debug!("theme preference unreadable, treating as unset: {_e}");
                ThemePreference::Unset
            }
        }
    }

    fn write(&mut self, theme: ResolvedTheme) {
        if let Err(_e) = self.try_write(theme) {
            #[cfg(feature = "hydrate")]
            log::warn!("theme preference not persisted: {_e}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, ThemeStorageError> {
    let window = web_sys::window().ok_or(ThemeStorageError::NoWindow)?;
    window
        .local_storage()
        .map_err(|e| ThemeStorageError::Access(format!("{e:?}")))?
        .ok_or(ThemeStorageError::Unavailable)
}

/// [`DarkMarkerSink`] that toggles the `dark` class on `<html>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRootMarker;

impl DarkMarkerSink for DocumentRootMarker {
    fn set_dark(&mut self, enabled: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let class_list = el.class_list();
                let _ = if enabled { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = enabled;
        }
    }
}

/// [`ColorSchemeQuery`] backed by `window.matchMedia`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemColorScheme;

impl ColorSchemeQuery for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
                .is_some_and(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Inline `<head>` script that applies the dark class before first paint.
///
/// Uses the same resolution rule as the synchronizer and never writes
/// storage. A storage read that throws counts as unset, so the OS scheme is
/// still consulted; a missing `matchMedia` leaves the page light.
#[must_use]
pub fn boot_script() -> String {
    format!(
        "(function(){{var t=null;try{{t=localStorage.getItem({key:?});}}catch(e){{}}\
         try{{if(t==={dark:?}||(t!=={light:?}&&window.matchMedia({query:?}).matches))\
         {{document.documentElement.classList.add({class:?});}}}}catch(e){{}}}})();",
        key = STORAGE_KEY,
        dark = ResolvedTheme::Dark.as_str(),
        light = ResolvedTheme::Light.as_str(),
        query = DARK_SCHEME_QUERY,
        class = DARK_CLASS,
    )
}
