// ABOUTME: Per-user cooldown tracker - minimum interval between accepted commands.
// ABOUTME: A denied attempt never pushes the cooldown window forward.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Outcome of a cooldown check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownStatus {
    /// The user is clear; the attempt has been stamped.
    Ready,

    /// The user acted too recently. The stamp is left untouched, so
    /// repeated spam does not extend the wait.
    TooSoon { remaining: Duration },
}

/// Tracks each user's last accepted command time.
///
/// Keys are user identifiers already normalized to lowercase at the dispatch
/// boundary. Entries are created on first command and overwritten on each
/// accepted attempt; they are never deleted, so memory is bounded by the
/// active-user count.
pub struct CooldownTracker {
    last_attempt: Mutex<HashMap<String, Instant>>,
    cooldown: Duration,
}

impl CooldownTracker {
    /// Create a tracker enforcing the given minimum interval.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            last_attempt: Mutex::new(HashMap::new()),
            cooldown,
        }
    }

    /// Check whether `user` may act at `now`, stamping the attempt if so.
    ///
    /// The stamp is consumed on attempt, not on success: a command that is
    /// admitted here but later fails downstream still started the clock.
    pub async fn check_and_stamp(&self, user: &str, now: Instant) -> CooldownStatus {
        let mut stamps = self.last_attempt.lock().await;

        if let Some(&last) = stamps.get(user) {
            let elapsed = now.duration_since(last);
            if elapsed < self.cooldown {
                return CooldownStatus::TooSoon {
                    remaining: self.cooldown - elapsed,
                };
            }
        }

        stamps.insert(user.to_string(), now);
        CooldownStatus::Ready
    }
}
