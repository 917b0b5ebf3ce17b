//! Home page: bio, the "Work" project grid, and recent articles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Articles are fetched once per session after hydration; the server render
//! and the first client render both show the loading notice so hydration
//! sees identical markup.

use leptos::prelude::*;

use crate::app::{AUTHOR_BIO, AUTHOR_IMAGE, AUTHOR_NAME};
use crate::components::article_card::RecentArticles;
use crate::components::container::Container;
use crate::components::project_card::ProjectCard;
use crate::state::posts::PostsState;
use crate::state::projects::PROJECTS;

#[component]
pub fn HomePage() -> impl IntoView {
    let posts = expect_context::<RwSignal<PostsState>>();

    Effect::new(move || {
        let mut start = false;
        posts.update(|s| start = s.begin());
        if start {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_recent_posts().await;
                posts.update(|s| s.finish(result));
            });
        }
    });

    let articles = move || {
        let state = posts.get();
        if let Some(error) = state.error {
            return view! { <p class="notice notice--error">{error}</p> }.into_any();
        }
        if !state.loaded {
            return view! { <p class="notice">"Loading articles..."</p> }.into_any();
        }
        if state.items.is_empty() {
            return view! { <p class="notice">"No articles yet."</p> }.into_any();
        }
        view! { <RecentArticles posts=state.items/> }.into_any()
    };

    view! {
        <Container>
            <section class="hero">
                <div class="hero__portrait">
                    <img alt=AUTHOR_NAME src=AUTHOR_IMAGE width="176" height="176"/>
                </div>
                <h1 class="hero__title">
                    "Hallo! I'm "
                    <span class="accent">{AUTHOR_NAME}</span>
                    <br/>
                    "- "
                    {AUTHOR_BIO}
                </h1>
            </section>
            <section id="work" class="work">
                <h2 class="section-title">"Work"</h2>
                <div class="work__grid">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project/> }).collect_view()}
                </div>
            </section>
            <section id="articles" class="recent-articles">
                <h2 class="section-title">"Recent articles"</h2>
                {articles}
            </section>
        </Container>
    }
}
