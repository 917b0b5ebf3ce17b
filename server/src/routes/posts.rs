//! Blog post routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use folio_content::{Post, PostSummary};

use crate::state::AppState;

/// `GET /api/posts` — every post summary, newest first.
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<PostSummary>> {
    Json(state.posts.summaries().to_vec())
}

/// `GET /api/posts/recent` — the newest summaries for the home page.
pub async fn recent_posts(State(state): State<AppState>) -> Json<Vec<PostSummary>> {
    Json(state.posts.recent(state.recent_limit))
}

/// `GET /api/posts/:slug` — one full post.
pub async fn get_post(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<Post>, StatusCode> {
    state
        .posts
        .get(&slug)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
#[path = "posts_test.rs"]
mod tests;
