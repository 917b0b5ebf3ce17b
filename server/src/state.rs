//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The post index is built once at startup and only read afterwards, so it
//! sits behind a plain `Arc` with no lock.

use std::sync::Arc;

use crate::services::content::PostIndex;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostIndex>,
    /// Number of posts returned by the recent-posts endpoint.
    pub recent_limit: usize,
}

impl AppState {
    #[must_use]
    pub fn new(posts: PostIndex, recent_limit: usize) -> Self {
        Self { posts: Arc::new(posts), recent_limit }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use folio_content::{Post, PostSummary, RECENT_POSTS_LIMIT};

    use super::*;

    /// Build a post with the given slug and date and a one-line body.
    #[must_use]
    pub fn sample_post(slug: &str, published_at: &str) -> Post {
        Post {
            summary: PostSummary {
                slug: slug.to_owned(),
                title: format!("Post {slug}"),
                summary: format!("About {slug}"),
                published_at: published_at.to_owned(),
                image: None,
                tags: Some(r#"["rust"]"#.to_owned()),
            },
            body: format!("# {slug}"),
        }
    }

    /// Create a test `AppState` over the given posts.
    #[must_use]
    pub fn test_app_state(posts: Vec<Post>) -> AppState {
        AppState::new(PostIndex::new(posts), RECENT_POSTS_LIMIT)
    }
}
