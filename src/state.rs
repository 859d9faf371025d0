// ABOUTME: Global bot state - the commands-enabled flag and process start time.
// ABOUTME: Shared via Arc; the only cross-cutting mutable state in the crate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Shared runtime state for the bot.
///
/// The enabled flag has exactly two writers: admin enable/disable commands
/// and the rate limiter's automatic disable on quota exhaustion. There is no
/// transition out of disabled except an explicit admin enable.
pub struct BotState {
    enabled: AtomicBool,
    started_at: Instant,
}

impl Default for BotState {
    fn default() -> Self {
        Self::new()
    }
}

impl BotState {
    /// Create a new state with commands enabled, stamped at the current instant.
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            started_at: Instant::now(),
        }
    }

    /// Whether command processing is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Enable command processing.
    pub fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    /// Disable command processing.
    pub fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    /// Time elapsed since process start.
    pub fn uptime(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_enabled() {
        let state = BotState::new();
        assert!(state.is_enabled());
    }

    #[test]
    fn disable_then_enable_round_trips() {
        let state = BotState::new();
        state.disable();
        assert!(!state.is_enabled());
        state.enable();
        assert!(state.is_enabled());
    }

    #[test]
    fn uptime_advances() {
        let state = BotState::new();
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(state.uptime() >= std::time::Duration::from_millis(10));
    }
}
