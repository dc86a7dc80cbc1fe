use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One configured news feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    /// Human-readable label used in log lines only.
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
}

impl FeedSource {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            name: None,
            url: url.to_owned(),
        }
    }

    #[must_use]
    pub fn named(name: &str, url: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            url: url.to_owned(),
        }
    }

    /// Name if configured, otherwise the URL.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.url)
    }
}

#[derive(Debug, Deserialize)]
pub struct FeedsFile {
    pub feeds: Vec<FeedSource>,
}

const DEFAULT_FEEDS: &[(&str, &str)] = &[
    ("CNBC Markets", "https://www.cnbc.com/id/10001147/device/rss/rss.html"),
    ("CNBC Business", "https://www.cnbc.com/id/10000664/device/rss/rss.html"),
    ("CNBC World", "https://www.cnbc.com/id/10000108/device/rss/rss.html"),
    ("CNBC Economy", "https://www.cnbc.com/id/10001054/device/rss/rss.html"),
    ("CNBC Technology", "https://www.cnbc.com/id/19854910/device/rss/rss.html"),
    ("CNBC Politics", "https://www.cnbc.com/id/10000113/device/rss/rss.html"),
    ("CNBC Health Care", "https://www.cnbc.com/id/10000116/device/rss/rss.html"),
    ("CNBC Real Estate", "https://www.cnbc.com/id/10000739/device/rss/rss.html"),
    ("CNBC Personal Finance", "https://www.cnbc.com/id/100646281/device/rss/rss.html"),
    ("CNBC Lifestyle", "https://www.cnbc.com/id/10000115/device/rss/rss.html"),
    ("FT World", "https://www.ft.com/rss/world"),
    ("FT Companies", "https://www.ft.com/rss/companies"),
    ("FT Markets", "https://www.ft.com/rss/markets"),
    ("FT Opinion", "https://www.ft.com/rss/opinion"),
    ("FT UK", "https://www.ft.com/rss/uk"),
];

/// The built-in CNBC and Financial Times feed list, in collection order.
#[must_use]
pub fn default_feed_sources() -> Vec<FeedSource> {
    DEFAULT_FEEDS
        .iter()
        .map(|&(name, url)| FeedSource::named(name, url))
        .collect()
}

/// Load and validate a feed list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_feeds(path: &Path) -> Result<Vec<FeedSource>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FeedsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let feeds_file: FeedsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::FeedsFileParse)?;

    validate_feeds(&feeds_file.feeds)?;

    Ok(feeds_file.feeds)
}

fn validate_feeds(feeds: &[FeedSource]) -> Result<(), ConfigError> {
    if feeds.is_empty() {
        return Err(ConfigError::Validation(
            "feed list must contain at least one feed".to_string(),
        ));
    }

    let mut seen_urls = HashSet::new();
    for feed in feeds {
        let url = feed.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "feed '{}' has unsupported URL '{}'; must be http(s)",
                feed.label(),
                feed.url
            )));
        }
        if !seen_urls.insert(url) {
            return Err(ConfigError::Validation(format!(
                "duplicate feed URL: '{url}'"
            )));
        }
    }

    Ok(())
}
