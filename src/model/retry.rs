/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::DEFAULT_RETRY_DELAY_SECS;
use crate::utils::config::get_env_or_none;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for retrying requests rejected by a secondary rate limit
///
/// Primary rate-limit errors are never retried: the window may take up to an
/// hour to reset and the caller is better placed to decide what to do.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries (None = retry until the request goes through)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds used when the server gives no hint (None = 10 seconds)
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Creates a configuration from `GH_MAX_RETRY_COUNT` and `GH_RETRY_DELAY_SECS`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Never retry
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_retry_count: Some(0),
            retry_delay_secs: None,
        }
    }

    /// Retry until the request goes through
    #[must_use]
    pub fn infinite() -> Self {
        Self {
            max_retry_count: None,
            retry_delay_secs: None,
        }
    }

    /// Retry at most `max_retries` times with the default delay
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: None,
        }
    }

    /// Retry at most `max_retries` times waiting `delay_secs` when the server gives no hint
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Whether the `attempt`-th retry (starting at 1) is allowed
    #[must_use]
    pub fn allows(&self, attempt: u32) -> bool {
        self.max_retry_count.is_none_or(|max| attempt <= max)
    }

    /// Gets the retry delay in seconds (default: 10)
    #[must_use]
    pub fn delay_secs(&self) -> u64 {
        self.retry_delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS)
    }

    /// Delay before the next attempt, preferring the server's `retry_after`
    #[must_use]
    pub fn delay_for(&self, retry_after: Option<Duration>) -> Duration {
        retry_after.unwrap_or_else(|| Duration::from_secs(self.delay_secs()))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retry_count: get_env_or_none("GH_MAX_RETRY_COUNT").or(Some(0)),
            retry_delay_secs: get_env_or_none("GH_RETRY_DELAY_SECS"),
        }
    }
}
