//! Server configuration parsed from environment variables.

use std::path::PathBuf;

use folio_content::RECENT_POSTS_LIMIT;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTENT_DIR: &str = "data/blog";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// Directory of markdown posts with YAML front matter.
    pub content_dir: PathBuf,
    /// Static files (images) served as the fallback route.
    pub public_dir: PathBuf,
    /// Number of posts returned by `/api/posts/recent`.
    pub recent_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            recent_limit: RECENT_POSTS_LIMIT,
        }
    }
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONTENT_DIR`: default `data/blog`
    /// - `PUBLIC_DIR`: default `public`
    /// - `RECENT_POSTS_LIMIT`: default 4, must be at least 1
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for unparseable numeric values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = env_parse("PORT", defaults.port)?;
        let content_dir = std::env::var("CONTENT_DIR").map_or(defaults.content_dir, PathBuf::from);
        let public_dir = std::env::var("PUBLIC_DIR").map_or(defaults.public_dir, PathBuf::from);
        let recent_limit = env_parse("RECENT_POSTS_LIMIT", defaults.recent_limit)?;
        if recent_limit == 0 {
            return Err(ConfigError::Invalid {
                var: "RECENT_POSTS_LIMIT",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self { port, content_dir, public_dir, recent_limit })
    }
}

fn env_parse<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::Invalid { var, value, reason: e.to_string() }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
