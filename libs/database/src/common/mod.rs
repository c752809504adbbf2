//! Helpers independent of any particular database

pub mod retry;

pub use retry::{RetryConfig, retry, retry_with_backoff};
