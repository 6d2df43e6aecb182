/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client-side rate limiter
//!
//! The server enforces its own quotas and the client tracks them through
//! response headers. This limiter sits in front of that: it spreads requests
//! so that a busy application drains its hourly quota evenly instead of
//! exhausting it in the first minutes and then failing until the reset.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Rate limiter for controlling API request rates
///
/// A token bucket refilled at `max_requests / period_seconds`, holding up to
/// `burst_size` tokens.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// Zero values fall back to one request per second with a burst of 10.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = config.max_requests.max(1);
        let period = Duration::from_secs(config.period_seconds.max(1));
        let replenish = (period / max_requests).max(Duration::from_nanos(1));

        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN.saturating_add(9));

        let quota = Quota::with_period(replenish)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Checks if a request can be made immediately, consuming a token if so
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
