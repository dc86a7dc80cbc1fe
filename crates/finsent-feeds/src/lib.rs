//! Feed collection for the sentiment analyzer.
//!
//! [`FeedFetcher`] downloads one RSS feed with bounded retry and exponential
//! backoff, degrading to an empty headline list when every attempt fails.
//! [`Collector`] runs the fetcher over the configured sources in order and
//! deduplicates headlines across them.

pub mod collector;
pub mod error;
pub mod fetcher;
pub mod parse;
pub mod retry;

pub use collector::{Collector, HeadlineFetcher};
pub use error::FeedError;
pub use fetcher::FeedFetcher;
pub use parse::parse_feed_titles;
pub use retry::{RetryPolicy, Sleeper, TokioSleeper};
