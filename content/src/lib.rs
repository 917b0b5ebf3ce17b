//! Shared blog post model and listing rules.
//!
//! This crate owns the post record shape used by both `server` and `client`.
//! Records mirror what the static content pipeline emits: `publishedAt` is an
//! ISO-8601 string and `tags` is a JSON-encoded array string, so both sides
//! decode lazily and tolerate malformed values instead of rejecting a post.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Number of posts shown in the home page "recent articles" list.
pub const RECENT_POSTS_LIMIT: usize = 4;

/// Error returned by [`parse_published_at`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The value matched none of the accepted ISO-8601 shapes.
    #[error("unrecognized publishedAt value: {0:?}")]
    Unrecognized(String),
}

/// Listing metadata for one post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    /// URL slug, unique per post.
    pub slug: String,
    pub title: String,
    pub summary: String,
    /// ISO-8601 publication timestamp as written by the author.
    pub published_at: String,
    /// Optional cover image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// JSON-encoded array of tag strings, e.g. `["rust","web"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl PostSummary {
    /// Decoded tag list; empty when absent or malformed.
    #[must_use]
    pub fn tag_list(&self) -> Vec<String> {
        decode_tags(self.tags.as_deref())
    }

    /// Human-readable publication date, if `published_at` parses.
    #[must_use]
    pub fn published_label(&self) -> Option<String> {
        format_published_at(&self.published_at)
    }
}

/// A full post: listing metadata plus the markdown body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(flatten)]
    pub summary: PostSummary,
    /// Raw markdown body (front matter stripped).
    pub body: String,
}

/// Decode a JSON-encoded tag array.
///
/// Absent, malformed, or non-string-array values yield an empty list.
#[must_use]
pub fn decode_tags(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
        .unwrap_or_default()
}

/// Encode a tag list into the JSON string form carried on [`PostSummary`].
#[must_use]
pub fn encode_tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    serde_json::to_string(tags).ok()
}

/// Parse a `publishedAt` value.
///
/// Accepts RFC 3339 date-times, naive `YYYY-MM-DDTHH:MM[:SS]` (taken as UTC),
/// and plain `YYYY-MM-DD` dates (midnight UTC).
///
/// # Errors
///
/// Returns [`DateError::Unrecognized`] when no accepted shape matches.
pub fn parse_published_at(raw: &str) -> Result<OffsetDateTime, DateError> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(dt);
    }
    let naive_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    if let Ok(dt) = PrimitiveDateTime::parse(raw, naive_seconds) {
        return Ok(dt.assume_utc());
    }
    let naive_minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    if let Ok(dt) = PrimitiveDateTime::parse(raw, naive_minutes) {
        return Ok(dt.assume_utc());
    }
    let date_only = format_description!("[year]-[month]-[day]");
    Date::parse(raw, date_only)
        .map(|d| d.midnight().assume_utc())
        .map_err(|_| DateError::Unrecognized(raw.to_owned()))
}

/// Format a `publishedAt` value as `Month DD, YYYY` (e.g. `October 05, 2021`).
#[must_use]
pub fn format_published_at(raw: &str) -> Option<String> {
    let dt = parse_published_at(raw).ok()?;
    dt.date()
        .format(format_description!("[month repr:long] [day], [year]"))
        .ok()
}

/// Sort posts newest first.
///
/// Posts whose `published_at` does not parse sort after every dated post,
/// keeping their relative order.
pub fn sort_newest_first(posts: &mut [PostSummary]) {
    posts.sort_by_cached_key(|p| Reverse(parse_published_at(&p.published_at).ok()));
}

/// The `limit` newest posts, in display order.
#[must_use]
pub fn recent(posts: &[PostSummary], limit: usize) -> Vec<PostSummary> {
    let mut sorted = posts.to_vec();
    sort_newest_first(&mut sorted);
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
