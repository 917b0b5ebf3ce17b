//! Site header: logo, navigation, mobile menu, and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header owns the page's [`ThemeSynchronizer`](crate::state::theme::ThemeSynchronizer).
//! Its mount effect runs only in the browser, after hydration, which is what
//! gates DOM and storage access; the resolved theme is mirrored into
//! [`UiState`] so the toggle icon appears only once a theme is known.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::mobile_menu::MobileMenu;
use crate::state::ui::UiState;
use crate::util::dark_mode::browser_synchronizer;

/// A header navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub text: &'static str,
    /// Opens in a new tab with `rel="noreferrer"`.
    pub external: bool,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/#work", text: "Work", external: false },
    NavLink { href: "/about", text: "About", external: false },
];

const SUN_ICON_PATH: &str = "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z";
const MOON_ICON_PATH: &str = "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z";

/// `true` when `href` names the current path exactly.
pub(crate) fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
}

pub(crate) fn nav_item_class(active: bool) -> &'static str {
    if active { "nav-item nav-item--active" } else { "nav-item" }
}

/// The icon offers the theme a click switches to: sun while dark, moon while light.
pub(crate) fn theme_icon_path(dark: bool) -> &'static str {
    if dark { SUN_ICON_PATH } else { MOON_ICON_PATH }
}

/// Sticky site header.
#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let sync = StoredValue::new(browser_synchronizer());

    // Effects never run during SSR; this is the one mount transition.
    Effect::new(move || {
        let theme = sync.try_update_value(|s| s.mount());
        ui.update(|u| u.theme = theme);
    });

    let on_toggle = move |_| {
        if let Some(theme) = sync.try_update_value(|s| s.toggle()).flatten() {
            ui.update(|u| u.theme = Some(theme));
        }
    };

    view! {
        <div class="site-header">
            <nav class="site-header__nav">
                <a href="/" class="site-header__logo" aria-label="home">
                    <Logo/>
                </a>
                <span class="site-header__spacer"></span>
                <div class="site-header__links">
                    <MobileMenu/>
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <NavItem link=*link/> })
                        .collect_view()}
                </div>
                <button
                    aria-label="Toggle Dark Mode"
                    type="button"
                    class="theme-toggle"
                    on:click=on_toggle
                >
                    <Show when=move || ui.get().theme_ready()>
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            class="theme-toggle__icon"
                        >
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d=move || theme_icon_path(ui.get().is_dark())
                            />
                        </svg>
                    </Show>
                </button>
            </nav>
        </div>
    }
}

/// One navigation link with an active state.
#[component]
fn NavItem(link: NavLink) -> impl IntoView {
    let location = use_location();
    let class = move || nav_item_class(is_active(&location.pathname.get(), link.href));

    if link.external {
        view! {
            <a rel="noreferrer" target="_blank" href=link.href class=class>
                <span class="capsize">{link.text}</span>
            </a>
        }
        .into_any()
    } else {
        view! {
            <a href=link.href class=class>
                <span class="capsize">{link.text}</span>
            </a>
        }
        .into_any()
    }
}

/// One filled bar of the logo mark: `(width, height, rx, transform)`.
pub(crate) type LogoBar = (&'static str, &'static str, &'static str, &'static str);

pub(crate) const LOGO_BARS: &[LogoBar] = &[
    ("9.06832", "1.7781", "0.889051", "matrix(0.732736 0.680513 -0.732736 0.680513 40.7158 15.1279)"),
    ("9.0536", "1.78098", "0.890492", "matrix(0.717617 -0.696438 0.747454 0.664313 39.3643 16.1865)"),
    ("5.41681", "1.7802", "0.8901", "matrix(0.721782 0.69212 -0.743478 0.668761 29.6074 17.584)"),
    ("5.41681", "1.7802", "0.8901", "matrix(0.721782 0.69212 -0.743478 0.668761 33.5693 9.9668)"),
    ("11.2204", "1.7802", "0.8901", "matrix(0.721782 0.69212 -0.743478 0.668761 29.4229 11.7617)"),
    ("13.3599", "1.82008", "0.910039", "matrix(0.445963 0.895052 -0.918748 0.394844 19.9453 9.7959)"),
    ("13.5299", "1.82033", "0.910165", "matrix(-0.44354 0.896255 -0.919716 -0.392584 20.665 10.4688)"),
];

#[component]
fn Logo() -> impl IntoView {
    view! {
        <svg width="61" height="32" viewBox="0 0 61 32" fill="none" xmlns="http://www.w3.org/2000/svg">
            <rect x="1" y="1" width="58.8042" height="30" rx="1" stroke="#0073FF" stroke-width="2"/>
            {LOGO_BARS
                .iter()
                .map(|&(width, height, rx, transform)| {
                    view! { <rect width=width height=height rx=rx transform=transform fill="#0073FF"/> }
                })
                .collect_view()}
        </svg>
    }
}
