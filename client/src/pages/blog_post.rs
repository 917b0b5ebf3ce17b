//! Single blog post page at `/blog/:slug`.

#[cfg(test)]
#[path = "blog_post_test.rs"]
mod blog_post_test;

use folio_content::Post;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::container::Container;
use crate::util::markdown::render_markdown;

/// Fetch lifecycle of the post being viewed.
#[derive(Clone, Debug, PartialEq)]
pub enum PostView {
    Loading,
    Ready(Post),
    Failed(String),
}

impl From<Result<Post, String>> for PostView {
    fn from(result: Result<Post, String>) -> Self {
        match result {
            Ok(post) => Self::Ready(post),
            Err(e) => Self::Failed(e),
        }
    }
}

/// Slug from the route parameter. Links percent-encode the segment, so decode
/// it here; an already-decoded or malformed value is used as is.
pub(crate) fn slug_from_param(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned)
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| slug_from_param(&params.read().get("slug").unwrap_or_default()));
    let view_state = RwSignal::new(PostView::Loading);

    Effect::new(move || {
        let requested = slug.get();
        view_state.set(PostView::Loading);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_post(&requested).await;
            // Drop responses for a slug the user already navigated away from.
            if slug.get_untracked() == requested {
                view_state.set(result.into());
            }
        });
    });

    let content = move || match view_state.get() {
        PostView::Loading => view! { <p class="notice">"Loading..."</p> }.into_any(),
        PostView::Failed(error) => view! { <p class="notice notice--error">{error}</p> }.into_any(),
        PostView::Ready(post) => {
            let html = render_markdown(&post.body);
            let date = post.summary.published_label().unwrap_or_else(|| post.summary.published_at.clone());
            let tags = post
                .summary
                .tag_list()
                .into_iter()
                .map(|tag| view! { <span class="tag">{format!("#{tag}")}</span> })
                .collect_view();
            view! {
                <article class="post">
                    <h1 class="post__title">{post.summary.title}</h1>
                    <div class="post__meta">
                        <span class="post__date">{date}</span>
                        <div class="post__tags">{tags}</div>
                    </div>
                    <div class="post__body" inner_html=html></div>
                </article>
            }
            .into_any()
        }
    };

    view! { <Container>{content}</Container> }
}
