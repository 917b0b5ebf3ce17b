//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only fetched after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with display-ready messages instead of
//! panics so fetch failures degrade to an inline notice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use folio_content::{Post, PostSummary};

const RECENT_POSTS_ENDPOINT: &str = "/api/posts/recent";

/// Slugs may contain anything a file stem can, so the segment is
/// percent-encoded rather than filtered.
#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(slug: &str) -> String {
    format!("/api/posts/{}", urlencoding::encode(slug))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    if status == 404 {
        format!("{what} not found")
    } else {
        format!("{what} request failed: {status}")
    }
}

/// Fetch the newest posts from `/api/posts/recent`.
///
/// # Errors
///
/// Returns a display message if the request fails or on the server.
pub async fn fetch_recent_posts() -> Result<Vec<PostSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(RECENT_POSTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("posts", resp.status()));
        }
        resp.json::<Vec<PostSummary>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(format!("{RECENT_POSTS_ENDPOINT} not available on server"))
    }
}

/// Fetch one full post from `/api/posts/{slug}`.
///
/// # Errors
///
/// Returns a display message if the request fails, the post is unknown, or
/// on the server.
pub async fn fetch_post(slug: &str) -> Result<Post, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = post_endpoint(slug);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("post", resp.status()));
        }
        resp.json::<Post>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        Err("not available on server".to_owned())
    }
}
