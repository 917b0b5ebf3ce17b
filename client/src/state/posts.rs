//! Recent-articles state for the home page.
//!
//! DESIGN
//! ======
//! The server decides how many posts are recent (`RECENT_POSTS_LIMIT` on the
//! server side). The client keeps every item it is sent and only re-applies
//! the newest-first ordering, so the home page never depends on endpoint
//! ordering.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use folio_content::{PostSummary, sort_newest_first};

/// Recent post list backed by `/api/posts/recent`.
#[derive(Clone, Debug, Default)]
pub struct PostsState {
    pub items: Vec<PostSummary>,
    pub loading: bool,
    /// Set once a fetch has completed, successfully or not.
    pub loaded: bool,
    pub error: Option<String>,
}

impl PostsState {
    /// Mark a fetch as in flight. Returns `false` if one already ran or is
    /// running, so callers request at most once per page view.
    pub fn begin(&mut self) -> bool {
        if self.loading || self.loaded {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Record the outcome of a fetch.
    pub fn finish(&mut self, result: Result<Vec<PostSummary>, String>) {
        self.loading = false;
        self.loaded = true;
        match result {
            Ok(mut items) => {
                sort_newest_first(&mut items);
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e);
            }
        }
    }
}
