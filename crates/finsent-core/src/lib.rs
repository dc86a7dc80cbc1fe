//! Shared domain types and configuration for the financial news sentiment
//! analyzer.

pub mod app_config;
pub mod config;
pub mod feeds;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use feeds::{default_feed_sources, load_feeds, FeedSource, FeedsFile};
pub use types::{Headline, SentimentLabel, SentimentResult};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read feeds file {path}: {source}")]
    FeedsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse feeds file: {0}")]
    FeedsFileParse(#[source] serde_yaml::Error),

    #[error("config validation failed: {0}")]
    Validation(String),
}
