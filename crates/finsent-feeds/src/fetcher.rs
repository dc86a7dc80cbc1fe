//! HTTP fetcher for RSS feeds.

use std::time::Duration;

use reqwest::Client;

use finsent_core::{FeedSource, Headline};

use crate::error::FeedError;
use crate::parse::parse_feed_titles;
use crate::retry::{retry_with_backoff, RetryPolicy, Sleeper, TokioSleeper};

/// Downloads and parses one feed at a time.
///
/// A fetch never fails from the caller's point of view: once the retry budget
/// is exhausted the feed contributes zero headlines and a warning is logged.
pub struct FeedFetcher<S = TokioSleeper> {
    client: Client,
    policy: RetryPolicy,
    sleeper: S,
}

impl FeedFetcher<TokioSleeper> {
    /// Creates a fetcher that sleeps in real time between attempts.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str, policy: RetryPolicy) -> Result<Self, FeedError> {
        Self::with_sleeper(timeout_secs, user_agent, policy, TokioSleeper)
    }
}

impl<S: Sleeper> FeedFetcher<S> {
    /// Creates a fetcher with a custom [`Sleeper`] (for tests that must not
    /// wait out the back-off schedule).
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_sleeper(
        timeout_secs: u64,
        user_agent: &str,
        policy: RetryPolicy,
        sleeper: S,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            policy,
            sleeper,
        })
    }

    #[must_use]
    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Fetches `source` and returns its item titles in document order.
    ///
    /// Returns an empty `Vec` when every attempt fails.
    pub async fn fetch(&self, source: &FeedSource) -> Vec<Headline> {
        let url = source.url.as_str();
        let result =
            retry_with_backoff(&self.policy, &self.sleeper, url, || self.fetch_once(url)).await;

        match result {
            Ok(headlines) => {
                tracing::info!(
                    feed = source.label(),
                    url,
                    count = headlines.len(),
                    "fetched feed headlines"
                );
                headlines
            }
            Err(e) => {
                tracing::warn!(
                    feed = source.label(),
                    url,
                    attempts = self.policy.max_attempts(),
                    error = %e,
                    "skipping feed after all attempts failed"
                );
                Vec::new()
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<Vec<Headline>, FeedError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        parse_feed_titles(&body)
    }
}
