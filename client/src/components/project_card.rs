//! Card for one app in the "Work" grid.

use leptos::prelude::*;

use crate::state::projects::Project;

/// Project tile. Released projects link to their detail page.
#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let badges = project
        .badges
        .iter()
        .map(|badge| view! { <span class=badge.class()>{badge.label()}</span> })
        .collect_view();

    let body = view! {
        <img
            src=project.image
            alt=project.name
            width="176"
            height="100"
            class="project-card__image"
        />
        <div class="project-card__heading">
            <h3 class="project-card__name">{project.name}</h3>
            <div class="project-card__badges">{badges}</div>
        </div>
        <p class="project-card__summary">{project.summary}</p>
    };

    match project.href() {
        Some(href) => view! { <a href=href class="project-card project-card--link">{body}</a> }.into_any(),
        None => view! { <div class="project-card">{body}</div> }.into_any(),
    }
}
