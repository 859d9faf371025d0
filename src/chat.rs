// ABOUTME: Chat boundary types - incoming events and the outbound reply seam.
// ABOUTME: The transport itself (IRC, WebSocket) lives outside this crate.

use std::time::Instant;

use async_trait::async_trait;

/// One incoming chat message.
#[derive(Debug, Clone)]
pub struct ChatEvent {
    pub user: String,
    pub text: String,

    /// Receipt time; drives cooldown and rate-window decisions.
    pub at: Instant,
}

impl ChatEvent {
    /// Create an event stamped at the current instant.
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            text: text.into(),
            at: Instant::now(),
        }
    }
}

/// Trait for the outbound reply channel back to chat.
#[async_trait]
pub trait Replier: Send + Sync {
    /// Send a reply into the channel the commands arrive from.
    async fn reply(&self, text: &str) -> Result<(), anyhow::Error>;
}
