//! Content service: loads markdown posts into an in-memory index.
//!
//! DESIGN
//! ======
//! Posts are markdown files in one directory, each starting with a YAML
//! front matter block delimited by `---` lines. The slug defaults to the
//! file stem. The whole directory is read once at startup; the site has no
//! write path, so the index is immutable afterwards.
//!
//! ERROR HANDLING
//! ==============
//! A missing or unreadable directory fails startup. A single bad file is
//! logged and skipped so one typo does not take the blog down.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use folio_content::{Post, PostSummary, encode_tags, parse_published_at, recent, sort_newest_first};
use serde::Deserialize;
use tracing::{info, warn};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing front matter block")]
    MissingFrontMatter,
    #[error("invalid front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
    #[error("post has an empty slug")]
    EmptySlug,
}

/// YAML metadata at the top of a post file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrontMatter {
    title: String,
    summary: String,
    published_at: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    /// Overrides the file-stem slug.
    #[serde(default)]
    slug: Option<String>,
}

/// All loaded posts, with summaries kept newest first.
#[derive(Debug, Default)]
pub struct PostIndex {
    ordered: Vec<PostSummary>,
    by_slug: HashMap<String, Post>,
}

impl PostIndex {
    /// Build an index. On duplicate slugs the first post wins.
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        let mut by_slug = HashMap::with_capacity(posts.len());
        for post in posts {
            let slug = post.summary.slug.clone();
            if by_slug.contains_key(&slug) {
                warn!(%slug, "duplicate post slug; keeping the first");
                continue;
            }
            by_slug.insert(slug, post);
        }
        let mut ordered: Vec<PostSummary> = by_slug.values().map(|p| p.summary.clone()).collect();
        // HashMap order is arbitrary; settle ties by slug before the stable date sort.
        ordered.sort_by(|a, b| a.slug.cmp(&b.slug));
        sort_newest_first(&mut ordered);
        Self { ordered, by_slug }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Every summary, newest first.
    #[must_use]
    pub fn summaries(&self) -> &[PostSummary] {
        &self.ordered
    }

    /// The `limit` newest summaries.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<PostSummary> {
        recent(&self.ordered, limit)
    }

    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.by_slug.get(slug)
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Split `---`-delimited front matter from the body.
fn split_front_matter(raw: &str) -> Option<(&str, &str)> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let rest = raw.strip_prefix("---")?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Parse one post file. `default_slug` is used unless front matter names one.
///
/// # Errors
///
/// Returns [`ContentError::MissingFrontMatter`], [`ContentError::FrontMatter`]
/// or [`ContentError::EmptySlug`].
pub fn parse_post(default_slug: &str, raw: &str) -> Result<Post, ContentError> {
    let (yaml, body) = split_front_matter(raw).ok_or(ContentError::MissingFrontMatter)?;
    let meta: FrontMatter = serde_yaml::from_str(yaml)?;

    let slug = meta.slug.unwrap_or_else(|| default_slug.to_owned()).trim().to_owned();
    if slug.is_empty() {
        return Err(ContentError::EmptySlug);
    }

    Ok(Post {
        summary: PostSummary {
            slug,
            title: meta.title,
            summary: meta.summary,
            published_at: meta.published_at,
            image: meta.image,
            tags: encode_tags(&meta.tags),
        },
        body: body.trim_start_matches(['\r', '\n']).to_owned(),
    })
}

fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("mdx"))
}

// =============================================================================
// LOADING
// =============================================================================

/// Load every post in `dir` (non-recursive).
///
/// # Errors
///
/// Returns [`ContentError::Directory`] if the directory cannot be listed.
/// Individual files that fail to read or parse are skipped with a warning.
pub async fn load_posts(dir: &Path) -> Result<PostIndex, ContentError> {
    let dir_err = |source| ContentError::Directory { path: dir.to_path_buf(), source };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(dir_err)?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(dir_err)? {
        let path = entry.path();
        if is_post_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut posts = Vec::with_capacity(paths.len());
    let mut skipped = 0usize;
    for path in paths {
        match load_post(&path).await {
            Ok(post) => {
                if parse_published_at(&post.summary.published_at).is_err() {
                    warn!(
                        path = %path.display(),
                        published_at = %post.summary.published_at,
                        "unrecognized publishedAt; post will sort last"
                    );
                }
                posts.push(post);
            }
            Err(e) => {
                skipped += 1;
                warn!(path = %path.display(), error = %e, "skipping post");
            }
        }
    }

    let index = PostIndex::new(posts);
    info!(dir = %dir.display(), posts = index.len(), skipped, "content loaded");
    Ok(index)
}

async fn load_post(path: &Path) -> Result<Post, ContentError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ContentError::Read { path: path.to_path_buf(), source })?;
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    parse_post(stem, &raw)
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
