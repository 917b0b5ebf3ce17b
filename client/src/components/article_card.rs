//! Recent-article list and cards.

#[cfg(test)]
#[path = "article_card_test.rs"]
mod article_card_test;

use folio_content::PostSummary;
use leptos::prelude::*;

pub(crate) fn article_href(slug: &str) -> String {
    format!("/blog/{}", urlencoding::encode(slug))
}

/// Date shown on a card; falls back to the raw value when it does not parse.
pub(crate) fn date_label(post: &PostSummary) -> String {
    post.published_label().unwrap_or_else(|| post.published_at.clone())
}

/// Two-column grid of article cards, in the order given.
#[component]
pub fn RecentArticles(posts: Vec<PostSummary>) -> impl IntoView {
    view! {
        <div class="articles">
            {posts.into_iter().map(|post| view! { <ArticleCard post/> }).collect_view()}
        </div>
    }
}

#[component]
pub fn ArticleCard(post: PostSummary) -> impl IntoView {
    let href = article_href(&post.slug);
    let date = date_label(&post);
    let tags = post
        .tag_list()
        .into_iter()
        .map(|tag| view! { <span class="tag">{format!("#{tag}")}</span> })
        .collect_view();

    view! {
        <div class="article-card">
            <a href=href class="article-card__link">
                <h4 class="article-card__title">{post.title}</h4>
            </a>
            <div class="article-card__meta">
                <div class="article-card__tags">{tags}</div>
                <span class="article-card__date">{date}</span>
            </div>
            <p class="article-card__summary">{post.summary}</p>
        </div>
    }
}
