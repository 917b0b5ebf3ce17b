//! Detail page for a released app, e.g. `/apps/lapse`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::container::Container;
use crate::state::projects::find_project;

#[component]
pub fn AppDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    let content = move || match find_project(&slug()) {
        Some(project) => {
            let badges = project
                .badges
                .iter()
                .map(|badge| view! { <span class=badge.class()>{badge.label()}</span> })
                .collect_view();
            view! {
                <article class="app-detail">
                    <img src=project.image alt=project.name class="app-detail__image"/>
                    <h1 class="app-detail__name">{project.name}</h1>
                    <div class="app-detail__badges">{badges}</div>
                    <p class="app-detail__summary">{project.summary}</p>
                </article>
            }
            .into_any()
        }
        None => view! { <p class="notice">"App not found."</p> }.into_any(),
    };

    view! { <Container>{content}</Container> }
}
