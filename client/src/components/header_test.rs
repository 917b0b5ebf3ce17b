use super::*;

#[test]
fn is_active_requires_exact_path() {
    assert!(is_active("/about", "/about"));
    assert!(!is_active("/about/team", "/about"));
    assert!(!is_active("/", "/#work"));
}

#[test]
fn nav_item_class_marks_active_link() {
    assert_eq!(nav_item_class(true), "nav-item nav-item--active");
    assert_eq!(nav_item_class(false), "nav-item");
}

#[test]
fn theme_icon_offers_the_other_theme() {
    assert_eq!(theme_icon_path(true), SUN_ICON_PATH);
    assert_eq!(theme_icon_path(false), MOON_ICON_PATH);
}

#[test]
fn nav_links_are_internal_work_and_about() {
    let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
    assert_eq!(hrefs, vec!["/#work", "/about"]);
    assert!(NAV_LINKS.iter().all(|l| !l.external));
}

#[test]
fn logo_has_all_seven_bars_including_short_strokes() {
    assert_eq!(LOGO_BARS.len(), 7);
    let short: Vec<_> = LOGO_BARS.iter().filter(|bar| bar.0 == "5.41681").map(|bar| bar.3).collect();
    assert_eq!(short.len(), 2);
    assert!(short[0].ends_with("29.6074 17.584)"));
    assert!(short[1].ends_with("33.5693 9.9668)"));
}
