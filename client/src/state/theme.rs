//! Theme preference resolution and the mount/toggle state machine.
//!
//! DESIGN
//! ======
//! Browser globals (`localStorage`, the `<html>` class list, the
//! `prefers-color-scheme` media query) are reached only through the three
//! collaborator traits below, so [`ThemeSynchronizer`] is plain data that runs
//! the same way in unit tests and in the hydrated app.
//!
//! The synchronizer starts `Unmounted`. `mount` resolves the authoritative
//! theme exactly once and applies the DOM marker without persisting;
//! `toggle` flips the theme, applies the marker, then persists. The component
//! that owns it only mirrors the returned value into a signal.
//!
//! ERROR HANDLING
//! ==============
//! Collaborators absorb their own failures: an unreadable store reads as
//! [`ThemePreference::Unset`], a missing media query reads as "not dark", and
//! a failed write is dropped. Nothing here can fail the caller.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// The user's explicit, persisted theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    /// No explicit choice has been persisted.
    #[default]
    Unset,
}

impl ThemePreference {
    /// Interpret a raw stored value. Anything but `"light"`/`"dark"` is unset.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            Some("dark") => Self::Dark,
            _ => Self::Unset,
        }
    }

    /// The explicit theme, if any.
    #[must_use]
    pub fn explicit(self) -> Option<ResolvedTheme> {
        match self {
            Self::Light => Some(ResolvedTheme::Light),
            Self::Dark => Some(ResolvedTheme::Dark),
            Self::Unset => None,
        }
    }
}

impl From<ResolvedTheme> for ThemePreference {
    fn from(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => Self::Light,
            ResolvedTheme::Dark => Self::Dark,
        }
    }
}

/// The theme actually applied to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Storage representation (`"light"` / `"dark"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which signal produced the current theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionSource {
    /// An explicit preference, read at mount or written by a toggle.
    Stored,
    /// The OS color-scheme query, with no stored preference.
    System,
    /// Neither signal asked for dark.
    Default,
}

/// Resolve a theme from a stored preference and the OS signal.
///
/// The stored preference always wins; otherwise dark iff the OS prefers dark.
#[must_use]
pub fn resolve(preference: ThemePreference, os_prefers_dark: bool) -> (ResolvedTheme, ResolutionSource) {
    match preference.explicit() {
        Some(theme) => (theme, ResolutionSource::Stored),
        None if os_prefers_dark => (ResolvedTheme::Dark, ResolutionSource::System),
        None => (ResolvedTheme::Light, ResolutionSource::Default),
    }
}

// =============================================================================
// COLLABORATORS
// =============================================================================

/// Durable per-origin storage for the explicit preference.
pub trait PreferenceStore {
    /// Current persisted preference; `Unset` when absent or unreadable.
    fn read(&self) -> ThemePreference;

    /// Persist an explicit choice. Best-effort: failures are swallowed.
    fn write(&mut self, theme: ResolvedTheme);
}

/// The document-root dark marker consumed by styling rules.
pub trait DarkMarkerSink {
    fn set_dark(&mut self, enabled: bool);
}

/// Read-only OS color-scheme signal.
pub trait ColorSchemeQuery {
    /// `true` when the environment reports a dark preference. Unavailable
    /// queries report `false`.
    fn prefers_dark(&self) -> bool;
}

// =============================================================================
// STATE MACHINE
// =============================================================================

/// Lifecycle phase of a [`ThemeSynchronizer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePhase {
    /// No rendering environment yet; DOM and storage are off limits.
    #[default]
    Unmounted,
    /// Attached. `None` only while the mount transition is resolving.
    Mounted(Option<ResolvedTheme>),
}

/// Reconciles stored preference, OS signal, and UI state into one theme.
#[derive(Debug)]
pub struct ThemeSynchronizer<S, M, Q> {
    store: S,
    marker: M,
    query: Q,
    phase: ThemePhase,
    source: Option<ResolutionSource>,
}

impl<S, M, Q> ThemeSynchronizer<S, M, Q>
where
    S: PreferenceStore,
    M: DarkMarkerSink,
    Q: ColorSchemeQuery,
{
    #[must_use]
    pub fn new(store: S, marker: M, query: Q) -> Self {
        Self { store, marker, query, phase: ThemePhase::Unmounted, source: None }
    }

    #[must_use]
    pub fn phase(&self) -> ThemePhase {
        self.phase
    }

    /// The applied theme, once mounted.
    #[must_use]
    pub fn theme(&self) -> Option<ResolvedTheme> {
        match self.phase {
            ThemePhase::Mounted(theme) => theme,
            ThemePhase::Unmounted => None,
        }
    }

    /// How the current theme was reached, once mounted.
    #[must_use]
    pub fn source(&self) -> Option<ResolutionSource> {
        self.source
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }

    /// Attach to a live document and resolve the authoritative theme.
    ///
    /// Applies the DOM marker but never writes the store: an OS-derived theme
    /// stays implicit until the user toggles. Calling `mount` again while
    /// mounted returns the current theme untouched.
    pub fn mount(&mut self) -> ResolvedTheme {
        if let Some(theme) = self.theme() {
            return theme;
        }
        self.phase = ThemePhase::Mounted(None);

        let preference = self.store.read();
        let os_prefers_dark = preference == ThemePreference::Unset && self.query.prefers_dark();
        let (theme, source) = resolve(preference, os_prefers_dark);

        self.marker.set_dark(theme.is_dark());
        self.phase = ThemePhase::Mounted(Some(theme));
        self.source = Some(source);
        theme
    }

    /// Flip the theme in response to one user click.
    ///
    /// Applies the DOM marker first, then persists; a failed write leaves the
    /// marker updated. Returns `None` (and does nothing) while unmounted.
    pub fn toggle(&mut self) -> Option<ResolvedTheme> {
        let next = self.theme()?.toggled();
        self.marker.set_dark(next.is_dark());
        self.store.write(next);
        self.phase = ThemePhase::Mounted(Some(next));
        self.source = Some(ResolutionSource::Stored);
        Some(next)
    }

    /// Detach, discarding in-memory state. Persisted state is untouched.
    pub fn unmount(&mut self) {
        self.phase = ThemePhase::Unmounted;
        self.source = None;
    }
}
