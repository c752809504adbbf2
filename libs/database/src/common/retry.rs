//! Backoff helpers for flaky connection attempts

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Tuning knobs for [`retry_with_backoff`]
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// How many retries are allowed after the first failure
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,

    /// Ceiling for the backoff delay, in milliseconds
    pub max_delay_ms: u64,

    /// Growth factor applied to the delay after each failure
    pub backoff_multiplier: f64,

    /// Randomize delays so parallel clients do not reconnect in lockstep
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Same as [`RetryConfig::default`]: 3 retries, 100ms initial delay,
    /// 5s ceiling, doubling, jitter on.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    /// Deterministic delays, mainly for tests
    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Run `operation` until it succeeds or the retry budget is spent.
///
/// Delays grow by `backoff_multiplier` after every failure, capped at
/// `max_delay_ms`. The error from the final attempt is returned as-is.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut delay_ms = config.initial_delay_ms;

    for failures in 0..=config.max_retries {
        match operation().await {
            Ok(value) => {
                if failures > 0 {
                    debug!(retries = failures, "operation recovered");
                }
                return Ok(value);
            }
            Err(err) if failures == config.max_retries => {
                warn!(
                    attempts = config.max_retries + 1,
                    "giving up after repeated failures: {}", err
                );
                return Err(err);
            }
            Err(err) => {
                let sleep_ms = if config.use_jitter {
                    jittered(delay_ms)
                } else {
                    delay_ms
                };
                debug!(
                    attempt = failures + 1,
                    sleep_ms, "attempt failed, backing off: {}", err
                );
                tokio::time::sleep(Duration::from_millis(sleep_ms)).await;
                delay_ms = ((delay_ms as f64 * config.backoff_multiplier) as u64)
                    .min(config.max_delay_ms);
            }
        }
    }

    unreachable!("loop returns on success or final failure")
}

/// Retry with the default budget (3 retries, 100ms initial delay)
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

/// Scale a delay by a pseudo-random factor in [0.5, 1.0], derived from
/// hashing the current time through `RandomState`.
fn jittered(delay_ms: u64) -> u64 {
    use std::hash::{BuildHasher, RandomState};

    let bucket = RandomState::new().hash_one(std::time::SystemTime::now()) % 50;
    let factor = 0.5 + bucket as f64 / 100.0;
    (delay_ms as f64 * factor) as u64
}
