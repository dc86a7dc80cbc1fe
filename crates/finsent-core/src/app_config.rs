use std::path::PathBuf;

use crate::feeds::FeedSource;

/// Runtime configuration for one analyzer run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub output_dir: PathBuf,
    pub feeds: Vec<FeedSource>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Total fetch attempts per feed, including the first.
    pub max_attempts: u32,
    /// Delay before retry `n` (0-based) is `backoff_base_secs ^ n` seconds.
    pub backoff_base_secs: f64,
}
