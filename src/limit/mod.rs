// ABOUTME: Limit module - admission throttling primitives.
// ABOUTME: Contains the sliding-window rate limiter and per-user cooldown tracker.

mod cooldown;
mod rate_limiter;

pub use cooldown::{CooldownStatus, CooldownTracker};
pub use rate_limiter::{Acquire, RateLimiter};

#[cfg(test)]
mod cooldown_test;
