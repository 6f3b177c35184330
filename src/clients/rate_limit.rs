//! Rate limit policy and shared call-budget tracking.
//!
//! Shopify meters REST calls with a leaky bucket per shop. Every response
//! reports the bucket state in `X-Shopify-Shop-Api-Call-Limit`, and a full
//! bucket answers with `429 Too Many Requests` and a `Retry-After` header.
//!
//! [`RateLimitPolicy`] decides what the client does about it:
//!
//! - how many times a rate-limited request is tried (`max_tries`)
//! - how long to wait between tries when `Retry-After` is absent
//! - whether to delay requests pre-emptively while the bucket is full
//!
//! [`RateLimiter`] holds the last observed bucket state. It is shared by
//! every clone of a client, so concurrent callers see the same budget.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::clients::http_response::ApiCallLimit;
use crate::error::ConfigError;

/// Longest wait the limiter will impose before a request.
const MAX_WAIT: Duration = Duration::from_secs(24 * 60 * 60);

/// How the client reacts to Shopify's call limits.
///
/// The defaults surface a 429 immediately and never throttle.
///
/// # Example
///
/// ```rust
/// use shopify_rest::RateLimitPolicy;
/// use std::time::Duration;
///
/// let policy = RateLimitPolicy::new()
///     .with_max_tries(5)
///     .with_retry_wait(Duration::from_millis(500))
///     .with_throttle(true)
///     .with_headroom(2);
///
/// assert_eq!(policy.max_tries(), 5);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateLimitPolicy {
    max_tries: u32,
    retry_wait: Duration,
    throttle: bool,
    leak_rate: f64,
    headroom: u32,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimitPolicy {
    /// Creates the default policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_tries: 1,
            retry_wait: Duration::from_secs(1),
            throttle: false,
            leak_rate: 2.0,
            headroom: 0,
        }
    }

    /// Sets the number of attempts for rate-limited requests.
    #[must_use]
    pub const fn with_max_tries(mut self, max_tries: u32) -> Self {
        self.max_tries = max_tries;
        self
    }

    /// Sets the wait between tries when a 429 carries no `Retry-After`.
    #[must_use]
    pub const fn with_retry_wait(mut self, retry_wait: Duration) -> Self {
        self.retry_wait = retry_wait;
        self
    }

    /// Enables waiting before sending while the bucket is full.
    #[must_use]
    pub const fn with_throttle(mut self, throttle: bool) -> Self {
        self.throttle = throttle;
        self
    }

    /// Sets the bucket drain rate in requests per second.
    #[must_use]
    pub const fn with_leak_rate(mut self, leak_rate: f64) -> Self {
        self.leak_rate = leak_rate;
        self
    }

    /// Sets the number of credits to keep free when throttling.
    #[must_use]
    pub const fn with_headroom(mut self, headroom: u32) -> Self {
        self.headroom = headroom;
        self
    }

    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }

    #[must_use]
    pub const fn retry_wait(&self) -> Duration {
        self.retry_wait
    }

    #[must_use]
    pub const fn throttle(&self) -> bool {
        self.throttle
    }

    #[must_use]
    pub const fn leak_rate(&self) -> f64 {
        self.leak_rate
    }

    #[must_use]
    pub const fn headroom(&self) -> u32 {
        self.headroom
    }

    /// Checks that the policy can be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRateLimitPolicy`] if `max_tries` is zero
    /// or `leak_rate` is not a positive finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tries == 0 {
            return Err(ConfigError::InvalidRateLimitPolicy {
                reason: "max_tries must be at least 1".to_string(),
            });
        }
        if !self.leak_rate.is_finite() || self.leak_rate <= 0.0 {
            return Err(ConfigError::InvalidRateLimitPolicy {
                reason: format!("leak_rate must be positive, got {}", self.leak_rate),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct LimiterState {
    last: Option<(ApiCallLimit, Instant)>,
    blocked_until: Option<Instant>,
}

/// Shared record of the shop's call budget.
///
/// The lock is only held while reading or writing the counters, never
/// across an `.await`.
#[derive(Debug, Default)]
pub struct RateLimiter {
    state: Mutex<LimiterState>,
}

impl RateLimiter {
    /// Creates a limiter with no observations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, LimiterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the most recently observed call limit.
    #[must_use]
    pub fn current(&self) -> Option<ApiCallLimit> {
        self.state().last.map(|(limit, _)| limit)
    }

    /// Records the call limit reported by a response.
    pub fn record(&self, limit: ApiCallLimit) {
        self.state().last = Some((limit, Instant::now()));
    }

    /// Records a `Retry-After` delay. Later deadlines replace earlier ones.
    ///
    /// Delays longer than a day are clamped to a day.
    pub fn record_retry_after(&self, delay: Duration) {
        let until = Instant::now() + delay.min(MAX_WAIT);
        let mut state = self.state();
        if state.blocked_until.map_or(true, |current| until > current) {
            state.blocked_until = Some(until);
        }
    }

    /// Returns how long to wait before sending under `policy`.
    ///
    /// The delay is the longer of the remaining `Retry-After` window and the
    /// time for the bucket to drain below `bucket_size - headroom`, and
    /// never more than a day.
    #[must_use]
    pub fn delay_before_next(&self, policy: &RateLimitPolicy) -> Duration {
        let now = Instant::now();
        let state = self.state();

        let blocked = state
            .blocked_until
            .map_or(Duration::ZERO, |until| until.saturating_duration_since(now));

        let draining = state.last.map_or(Duration::ZERO, |(limit, seen)| {
            let threshold = limit.bucket_size.saturating_sub(policy.headroom());
            if limit.request_count < threshold {
                return Duration::ZERO;
            }
            let excess = f64::from(limit.request_count - threshold + 1);
            let needed = Duration::try_from_secs_f64(excess / policy.leak_rate())
                .map_or(MAX_WAIT, |needed| needed.min(MAX_WAIT));
            needed.saturating_sub(now.saturating_duration_since(seen))
        });

        blocked.max(draining)
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RateLimiter>();
    assert_send_sync::<RateLimitPolicy>();
};
