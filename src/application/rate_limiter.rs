//! Rate limiter for outgoing figo API requests
//!
//! A `governor` token bucket shared by every request issued through one
//! [`HttpTransport`](crate::model::http::HttpTransport). It only delays
//! dispatch; it never retries a request.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

const FALLBACK_BURST: NonZeroU32 = NonZeroU32::MIN.saturating_add(9);
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Token bucket rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// One permit is replenished every `period_seconds / max_requests`; up to
    /// `burst_size` permits can be consumed at once. A zero burst falls back to ten.
    ///
    /// ```ignore
    /// let limiter = RateLimiter::new(&RateLimiterConfig::default());
    /// limiter.wait().await;
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(FALLBACK_BURST);
        let interval = replenish_interval(config);

        let quota = Quota::with_period(interval)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        while self.limiter.check().is_err() {
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Checks if a request can be made immediately, consuming a permit when it can
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

fn replenish_interval(config: &RateLimiterConfig) -> Duration {
    let max_requests = config.max_requests.max(1);
    let period_ms = config.period_seconds.saturating_mul(1000);
    Duration::from_millis((period_ms / u64::from(max_requests)).max(1))
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
