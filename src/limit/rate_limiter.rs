// ABOUTME: Sliding-window rate limiter with a hard lifetime quota.
// ABOUTME: Protects the upstream device API from bursts and from runaway total use.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::state::BotState;

/// Outcome of a rate limiter admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquire {
    /// The request was admitted and recorded in the window.
    Allowed,

    /// The sliding window is full. Not an error: retry after the indicated
    /// wait (bounded by the window period) or abort the current broadcast.
    Denied { retry_after: Duration },

    /// The lifetime quota is spent. Command processing has been disabled
    /// and stays disabled until restart or explicit admin re-enable.
    QuotaExhausted,
}

/// Mutable state for the rate limiter, protected by a single mutex.
struct WindowState {
    /// Timestamps of admitted requests, oldest first.
    timestamps: VecDeque<Instant>,
    /// Lifetime count of admitted requests. Monotone, never reset.
    total_requests: u64,
}

/// Sliding-window rate limiter for outbound device calls.
///
/// A sliding window (rather than a fixed bucket) avoids burst-at-boundary
/// violations of the upstream per-minute limit. The lifetime ceiling is a
/// hard circuit breaker independent of the window: crossing it flips the
/// shared [`BotState`] to disabled.
pub struct RateLimiter {
    state: Mutex<WindowState>,
    max_requests: usize,
    period: Duration,
    quota_ceiling: u64,
    bot: Arc<BotState>,
}

impl RateLimiter {
    /// Create a new rate limiter.
    ///
    /// # Arguments
    ///
    /// * `max_requests` - Maximum admitted requests per window.
    /// * `period` - Sliding window length.
    /// * `quota_ceiling` - Hard lifetime cap on admitted requests.
    /// * `bot` - Shared state to disable when the quota is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `max_requests` is zero or `period` is zero.
    pub fn new(
        max_requests: usize,
        period: Duration,
        quota_ceiling: u64,
        bot: Arc<BotState>,
    ) -> Self {
        assert!(max_requests > 0, "max_requests must be positive");
        assert!(!period.is_zero(), "period must be positive");

        Self {
            state: Mutex::new(WindowState {
                timestamps: VecDeque::new(),
                total_requests: 0,
            }),
            max_requests,
            period,
            quota_ceiling,
            bot,
        }
    }

    /// Attempt to admit one request at `now`.
    ///
    /// Prunes timestamps that have left the window, then checks the window
    /// count, then the lifetime quota. Only an `Allowed` outcome records the
    /// timestamp and increments the lifetime counter, so denials never
    /// consume quota.
    pub async fn try_acquire(&self, now: Instant) -> Acquire {
        let mut state = self.state.lock().await;

        while let Some(&oldest) = state.timestamps.front() {
            if now.duration_since(oldest) >= self.period {
                state.timestamps.pop_front();
            } else {
                break;
            }
        }

        if state.timestamps.len() >= self.max_requests {
            // Window full: the wait is until the oldest retained timestamp
            // exits the window, so it is always bounded by the period.
            if let Some(&oldest) = state.timestamps.front() {
                let retry_after = self.period - now.duration_since(oldest);
                tracing::debug!(
                    in_window = state.timestamps.len(),
                    max = self.max_requests,
                    ?retry_after,
                    "rate window full"
                );
                return Acquire::Denied { retry_after };
            }
        }

        if state.total_requests >= self.quota_ceiling {
            tracing::warn!(
                total = state.total_requests,
                ceiling = self.quota_ceiling,
                "lifetime quota exhausted, disabling commands"
            );
            self.bot.disable();
            return Acquire::QuotaExhausted;
        }

        state.timestamps.push_back(now);
        state.total_requests += 1;
        Acquire::Allowed
    }

    /// Lifetime usage: `(total admitted, ceiling)`.
    pub async fn usage(&self) -> (u64, u64) {
        let state = self.state.lock().await;
        (state.total_requests, self.quota_ceiling)
    }
}
