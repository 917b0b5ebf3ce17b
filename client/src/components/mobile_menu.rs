//! Collapsible navigation for narrow viewports.

use leptos::prelude::*;

use crate::components::header::NAV_LINKS;
use crate::state::ui::UiState;

/// Menu button plus a dropdown of the header links.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open);
    let on_pick = move |_| ui.update(|u| u.mobile_menu_open = false);

    view! {
        <div class="mobile-menu">
            <button
                type="button"
                class="mobile-menu__button"
                aria-label="Toggle menu"
                aria-expanded=move || ui.get().mobile_menu_open.to_string()
                on:click=on_toggle
            >
                {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
            </button>
            <Show when=move || ui.get().mobile_menu_open>
                <ul class="mobile-menu__list">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li class="mobile-menu__item">
                                    <a
                                        href=link.href
                                        target=link.external.then_some("_blank")
                                        rel=link.external.then_some("noreferrer")
                                        on:click=on_pick
                                    >
                                        {link.text}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
