use super::*;

// =============================================================
// Fakes
// =============================================================

#[derive(Debug, Default)]
struct MemoryStore {
    value: Option<String>,
    unreadable: bool,
    fail_writes: bool,
    writes: Vec<ResolvedTheme>,
}

impl MemoryStore {
    fn holding(value: &str) -> Self {
        Self { value: Some(value.to_owned()), ..Self::default() }
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self) -> ThemePreference {
        if self.unreadable {
            return ThemePreference::Unset;
        }
        ThemePreference::from_stored(self.value.as_deref())
    }

    fn write(&mut self, theme: ResolvedTheme) {
        self.writes.push(theme);
        if !self.fail_writes {
            self.value = Some(theme.as_str().to_owned());
        }
    }
}

#[derive(Debug, Default)]
struct RecordingMarker {
    dark: bool,
    applied: usize,
}

impl DarkMarkerSink for RecordingMarker {
    fn set_dark(&mut self, enabled: bool) {
        self.dark = enabled;
        self.applied += 1;
    }
}

/// `None` models an environment without a media query API.
#[derive(Debug, Clone, Copy)]
struct FixedScheme(Option<bool>);

impl ColorSchemeQuery for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.0.unwrap_or(false)
    }
}

type TestSync = ThemeSynchronizer<MemoryStore, RecordingMarker, FixedScheme>;

fn sync(store: MemoryStore, os_dark: bool) -> TestSync {
    ThemeSynchronizer::new(store, RecordingMarker::default(), FixedScheme(Some(os_dark)))
}

// =============================================================
// Preference parsing
// =============================================================

#[test]
fn from_stored_accepts_only_light_and_dark() {
    assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
    assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
    assert_eq!(ThemePreference::from_stored(None), ThemePreference::Unset);
    assert_eq!(ThemePreference::from_stored(Some("DARK")), ThemePreference::Unset);
    assert_eq!(ThemePreference::from_stored(Some("true")), ThemePreference::Unset);
    assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::Unset);
}

#[test]
fn resolved_theme_strings_and_toggle() {
    assert_eq!(ResolvedTheme::Light.as_str(), "light");
    assert_eq!(ResolvedTheme::Dark.to_string(), "dark");
    assert_eq!(ResolvedTheme::Light.toggled(), ResolvedTheme::Dark);
    assert_eq!(ResolvedTheme::Dark.toggled(), ResolvedTheme::Light);
}

// =============================================================
// Resolution table
// =============================================================

#[test]
fn mount_resolution_matches_table_for_every_combination() {
    let stored = [Some("light"), Some("dark"), None];
    for value in stored {
        for os_dark in [true, false] {
            let store = MemoryStore { value: value.map(str::to_owned), ..MemoryStore::default() };
            let mut s = sync(store, os_dark);
            let theme = s.mount();

            let expected = match value {
                Some("light") => ResolvedTheme::Light,
                Some("dark") => ResolvedTheme::Dark,
                _ if os_dark => ResolvedTheme::Dark,
                _ => ResolvedTheme::Light,
            };
            assert_eq!(theme, expected, "stored={value:?} os_dark={os_dark}");
            assert_eq!(s.marker().dark, expected.is_dark());
            assert!(s.store().writes.is_empty(), "mount must not persist");
        }
    }
}

#[test]
fn unset_store_with_dark_os_resolves_dark_without_writing() {
    let mut s = sync(MemoryStore::default(), true);
    assert_eq!(s.mount(), ResolvedTheme::Dark);
    assert!(s.marker().dark);
    assert_eq!(s.source(), Some(ResolutionSource::System));
    assert!(s.store().writes.is_empty());
    assert_eq!(s.store().value, None);
}

#[test]
fn stored_light_beats_dark_os() {
    let mut s = sync(MemoryStore::holding("light"), true);
    assert_eq!(s.mount(), ResolvedTheme::Light);
    assert!(!s.marker().dark);
    assert_eq!(s.source(), Some(ResolutionSource::Stored));
}

#[test]
fn malformed_stored_value_falls_through_to_os_signal() {
    let mut s = sync(MemoryStore::holding("sepia"), true);
    assert_eq!(s.mount(), ResolvedTheme::Dark);
    assert_eq!(s.source(), Some(ResolutionSource::System));
}

#[test]
fn unreadable_store_is_treated_as_unset() {
    let store = MemoryStore { value: Some("dark".to_owned()), unreadable: true, ..MemoryStore::default() };
    let mut s = sync(store, false);
    assert_eq!(s.mount(), ResolvedTheme::Light);
    assert_eq!(s.source(), Some(ResolutionSource::Default));
}

#[test]
fn missing_media_query_defaults_to_light() {
    let mut s = ThemeSynchronizer::new(MemoryStore::default(), RecordingMarker::default(), FixedScheme(None));
    assert_eq!(s.mount(), ResolvedTheme::Light);
    assert!(!s.marker().dark);
    assert_eq!(s.marker().applied, 1);
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn starts_unmounted_and_toggle_is_ignored_before_mount() {
    let mut s = sync(MemoryStore::holding("dark"), false);
    assert_eq!(s.phase(), ThemePhase::Unmounted);
    assert_eq!(s.theme(), None);
    assert_eq!(s.toggle(), None);
    assert_eq!(s.marker().applied, 0);
    assert!(s.store().writes.is_empty());
}

#[test]
fn mount_transitions_to_mounted_with_theme() {
    let mut s = sync(MemoryStore::holding("dark"), false);
    s.mount();
    assert_eq!(s.phase(), ThemePhase::Mounted(Some(ResolvedTheme::Dark)));
}

#[test]
fn second_mount_while_mounted_is_noop() {
    let mut s = sync(MemoryStore::default(), true);
    s.mount();
    s.toggle();
    assert_eq!(s.mount(), ResolvedTheme::Light);
    assert_eq!(s.marker().applied, 2);
}

#[test]
fn remount_with_explicit_preference_is_idempotent() {
    let mut s = sync(MemoryStore::holding("dark"), false);
    assert_eq!(s.mount(), ResolvedTheme::Dark);
    s.unmount();
    assert_eq!(s.phase(), ThemePhase::Unmounted);
    assert_eq!(s.mount(), ResolvedTheme::Dark);
    assert!(s.store().writes.is_empty());
    assert_eq!(s.store().value.as_deref(), Some("dark"));
}

#[test]
fn unmount_keeps_persisted_choice_for_next_mount() {
    let mut s = sync(MemoryStore::default(), false);
    s.mount();
    s.toggle();
    s.unmount();
    assert_eq!(s.theme(), None);
    assert_eq!(s.mount(), ResolvedTheme::Dark);
    assert_eq!(s.source(), Some(ResolutionSource::Stored));
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_light_to_dark_writes_dark() {
    let mut s = sync(MemoryStore::holding("light"), false);
    s.mount();
    assert_eq!(s.toggle(), Some(ResolvedTheme::Dark));
    assert!(s.marker().dark);
    assert_eq!(s.store().writes, vec![ResolvedTheme::Dark]);
    assert_eq!(s.store().value.as_deref(), Some("dark"));
}

#[test]
fn toggle_dark_to_light_writes_light() {
    let mut s = sync(MemoryStore::holding("dark"), false);
    s.mount();
    assert_eq!(s.toggle(), Some(ResolvedTheme::Light));
    assert!(!s.marker().dark);
    assert_eq!(s.store().value.as_deref(), Some("light"));
}

#[test]
fn toggle_from_os_derived_dark_persists_explicit_light() {
    let mut s = sync(MemoryStore::default(), true);
    s.mount();
    assert_eq!(s.toggle(), Some(ResolvedTheme::Light));
    assert_eq!(s.source(), Some(ResolutionSource::Stored));
    assert_eq!(s.store().value.as_deref(), Some("light"));
}

#[test]
fn each_toggle_is_a_single_flip() {
    let mut s = sync(MemoryStore::default(), false);
    s.mount();
    assert_eq!(s.toggle(), Some(ResolvedTheme::Dark));
    assert_eq!(s.toggle(), Some(ResolvedTheme::Light));
    assert_eq!(s.toggle(), Some(ResolvedTheme::Dark));
    assert_eq!(
        s.store().writes,
        vec![ResolvedTheme::Dark, ResolvedTheme::Light, ResolvedTheme::Dark]
    );
}

#[test]
fn failed_write_still_updates_marker() {
    let store = MemoryStore { value: Some("light".to_owned()), fail_writes: true, ..MemoryStore::default() };
    let mut s = sync(store, false);
    s.mount();
    assert_eq!(s.toggle(), Some(ResolvedTheme::Dark));
    assert!(s.marker().dark);
    assert_eq!(s.theme(), Some(ResolvedTheme::Dark));
    assert_eq!(s.store().value.as_deref(), Some("light"));
}

#[test]
fn marker_and_store_agree_with_theme_after_toggle() {
    let mut s = sync(MemoryStore::default(), true);
    s.mount();
    for _ in 0..3 {
        let theme = s.toggle().expect("mounted");
        assert_eq!(s.marker().dark, theme.is_dark());
        assert_eq!(s.store().read().explicit(), Some(theme));
    }
}
