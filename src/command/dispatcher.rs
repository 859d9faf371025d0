// ABOUTME: The dispatcher - resolves chat tokens, gates them, and routes
// ABOUTME: admitted commands to the orchestrator or the direct handlers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use super::gate::{Admission, CommandGate, DenyReason};
use super::table::{CommandAction, CommandTable};
use crate::config::Config;
use crate::device::{BroadcastOutcome, DeviceSink, Orchestrator};
use crate::limit::{CooldownTracker, RateLimiter};
use crate::state::BotState;

/// Snapshot returned by the status command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub enabled: bool,
    pub uptime: Duration,
    pub total_requests: u64,
    pub quota_ceiling: u64,
    pub admins: Vec<String>,
}

impl StatusReport {
    /// Lifetime quota still available.
    pub fn remaining(&self) -> u64 {
        self.quota_ceiling.saturating_sub(self.total_requests)
    }
}

/// Result of handling one chat command.
///
/// Carries enough structure for the caller to render a reply (or stay
/// silent); the dispatcher itself never talks to chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Every device took the color (name is the palette token).
    ColorSet { color: String },
    PoweredOn,
    PoweredOff,
    Enabled,
    Disabled,
    Status(StatusReport),

    /// The command was admitted but the broadcast aborted partway.
    BroadcastFailed { succeeded: usize },

    /// The gate refused the command.
    Denied(DenyReason),

    /// Unknown token, ignored silently.
    Ignored,
}

/// Routes chat command tokens through admission to execution.
///
/// Global state machine is exactly {Enabled, Disabled}: admin enable and
/// disable commands flip the flag, and the rate limiter flips it to
/// disabled on quota exhaustion. Nothing leaves disabled except an
/// explicit admin enable.
pub struct Dispatcher {
    table: CommandTable,
    gate: CommandGate,
    orchestrator: Orchestrator,
    limiter: Arc<RateLimiter>,
    state: Arc<BotState>,
    admins: Vec<String>,

    /// Serializes the admission phase so concurrent handlers cannot
    /// interleave gate decisions and cooldown stamps.
    admission: Mutex<()>,
}

impl Dispatcher {
    /// Wire the full dispatch stack from configuration and a device sink.
    pub fn from_config(config: &Config, sink: Arc<dyn DeviceSink>) -> Self {
        let state = Arc::new(BotState::new());
        let limiter = Arc::new(RateLimiter::new(
            config.rate_limit.max_requests,
            config.period(),
            config.rate_limit.quota_ceiling,
            state.clone(),
        ));
        let gate = CommandGate::new(
            config.chat.admin_users.iter().cloned(),
            state.clone(),
            CooldownTracker::new(config.user_cooldown()),
        );
        let orchestrator = Orchestrator::new(config.govee.devices.clone(), sink, limiter.clone());

        Self {
            table: CommandTable::standard(),
            gate,
            orchestrator,
            limiter,
            state,
            admins: config.chat.admin_users.clone(),
            admission: Mutex::new(()),
        }
    }

    /// Shared bot state (enabled flag, uptime).
    pub fn state(&self) -> Arc<BotState> {
        self.state.clone()
    }

    /// Handle one command attempt.
    ///
    /// `now` is the event's receipt time and drives cooldown decisions.
    /// User and token are case-normalized here, once, at the boundary.
    pub async fn handle(&self, user: &str, token: &str, now: Instant) -> DispatchOutcome {
        let user = user.to_lowercase();
        let token = token.to_lowercase();

        let Some(descriptor) = self.table.resolve(&token) else {
            return DispatchOutcome::Ignored;
        };

        let admission = {
            let _serialized = self.admission.lock().await;
            self.gate.admit(&user, descriptor, now).await
        };

        if let Admission::Denied(reason) = admission {
            tracing::debug!(%user, command = descriptor.name, %reason, "command denied");
            return DispatchOutcome::Denied(reason);
        }

        tracing::debug!(%user, command = descriptor.name, "command admitted");

        match descriptor.action {
            CommandAction::SetColor(rgb) => match self.orchestrator.set_color(rgb).await {
                BroadcastOutcome::Success { .. } => DispatchOutcome::ColorSet {
                    color: descriptor.name.to_string(),
                },
                BroadcastOutcome::PartialFailure { succeeded } => {
                    DispatchOutcome::BroadcastFailed { succeeded }
                }
            },
            CommandAction::PowerOn => match self.orchestrator.power_on().await {
                BroadcastOutcome::Success { .. } => DispatchOutcome::PoweredOn,
                BroadcastOutcome::PartialFailure { succeeded } => {
                    DispatchOutcome::BroadcastFailed { succeeded }
                }
            },
            CommandAction::PowerOff => match self.orchestrator.power_off().await {
                BroadcastOutcome::Success { .. } => DispatchOutcome::PoweredOff,
                BroadcastOutcome::PartialFailure { succeeded } => {
                    DispatchOutcome::BroadcastFailed { succeeded }
                }
            },
            CommandAction::Enable => {
                self.state.enable();
                tracing::info!(%user, "commands enabled");
                DispatchOutcome::Enabled
            }
            CommandAction::Disable => {
                self.state.disable();
                tracing::info!(%user, "commands disabled");
                DispatchOutcome::Disabled
            }
            CommandAction::Status => DispatchOutcome::Status(self.status().await),
        }
    }

    /// Current status snapshot, also used by the status command.
    pub async fn status(&self) -> StatusReport {
        let (total_requests, quota_ceiling) = self.limiter.usage().await;
        StatusReport {
            enabled: self.state.is_enabled(),
            uptime: self.state.uptime(),
            total_requests,
            quota_ceiling,
            admins: self.admins.clone(),
        }
    }
}
