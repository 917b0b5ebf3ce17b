use super::*;

#[test]
fn ui_state_default_has_no_theme_and_closed_menu() {
    let state = UiState::default();
    assert_eq!(state.theme, None);
    assert!(!state.theme_ready());
    assert!(!state.is_dark());
    assert!(!state.mobile_menu_open);
}

#[test]
fn ui_state_reports_dark_only_when_resolved_dark() {
    let mut state = UiState { theme: Some(ResolvedTheme::Light), ..UiState::default() };
    assert!(state.theme_ready());
    assert!(!state.is_dark());
    state.theme = Some(ResolvedTheme::Dark);
    assert!(state.is_dark());
}
