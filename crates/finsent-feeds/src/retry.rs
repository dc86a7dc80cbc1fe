//! Retry policy and exponential back-off for feed fetches.
//!
//! Every fetch failure is treated as transient: network errors, non-2xx
//! statuses and malformed documents are all retried until the attempt budget
//! runs out. Sleeping goes through a [`Sleeper`] so tests can record the
//! schedule instead of waiting on it.

use std::future::Future;
use std::time::Duration;

use crate::error::FeedError;

/// Attempt budget and back-off base for one feed.
///
/// | Failed attempt index | Sleep before next attempt |
/// |----------------------|---------------------------|
/// | 0                    | base⁰ = 1 s               |
/// | 1                    | base¹ s                   |
/// | n                    | baseⁿ s                   |
///
/// No sleep follows the final attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_base_secs: f64,
}

impl RetryPolicy {
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidRetryPolicy`] unless `max_attempts >= 1`
    /// and `backoff_base_secs` is finite and greater than 1.
    pub fn new(max_attempts: u32, backoff_base_secs: f64) -> Result<Self, FeedError> {
        if max_attempts == 0 {
            return Err(FeedError::InvalidRetryPolicy(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if !backoff_base_secs.is_finite() || backoff_base_secs <= 1.0 {
            return Err(FeedError::InvalidRetryPolicy(format!(
                "backoff base must be greater than 1, got {backoff_base_secs}"
            )));
        }
        Ok(Self {
            max_attempts,
            backoff_base_secs,
        })
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay after the failed attempt with 0-based index `attempt`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let secs = self.backoff_base_secs.powi(exponent);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base_secs: 2.0,
        }
    }
}

/// Blocking wait between attempts.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Real-time sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Runs `operation` until it succeeds or `policy.max_attempts()` attempts
/// have failed, sleeping `policy.delay_for(i)` after failed attempt `i`
/// whenever another attempt follows. Returns the last error on exhaustion.
pub(crate) async fn retry_with_backoff<T, S, F, Fut>(
    policy: &RetryPolicy,
    sleeper: &S,
    url: &str,
    mut operation: F,
) -> Result<T, FeedError>
where
    S: Sleeper,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FeedError>>,
{
    let max_attempts = policy.max_attempts();
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                let attempt_number = attempt + 1;
                if attempt_number >= max_attempts {
                    tracing::warn!(
                        url,
                        attempt = attempt_number,
                        max_attempts,
                        error = %err,
                        "feed fetch failed on final attempt"
                    );
                    return Err(err);
                }

                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    url,
                    attempt = attempt_number,
                    max_attempts,
                    delay_secs = delay.as_secs_f64(),
                    error = %err,
                    "feed fetch failed, retrying after back-off"
                );
                sleeper.sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
