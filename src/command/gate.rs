// ABOUTME: Admission control - global enable flag, admin allow-list, cooldown.
// ABOUTME: Decides whether a command may run before any resources are committed.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::table::{CommandDescriptor, Permission};
use crate::limit::{CooldownStatus, CooldownTracker};
use crate::state::BotState;

/// Why a command was refused admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// Command processing is globally disabled.
    Disabled,

    /// The command requires admin permission the user does not have.
    Unauthorized,

    /// The user acted too recently.
    Cooldown { remaining: Duration },
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DenyReason::Disabled => write!(f, "commands disabled"),
            DenyReason::Unauthorized => write!(f, "unauthorized"),
            DenyReason::Cooldown { remaining } => {
                write!(f, "cooldown ({:.1}s remaining)", remaining.as_secs_f64())
            }
        }
    }
}

/// Admission decision for one command attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Denied(DenyReason),
}

/// The admission gate in front of the dispatcher.
///
/// Checks run in a fixed order: global enable flag (admins bypass),
/// permission level, then cooldown. User identifiers are expected to be
/// lowercase already; normalization happens once at the dispatch boundary.
pub struct CommandGate {
    admins: HashSet<String>,
    state: Arc<BotState>,
    cooldown: CooldownTracker,
}

impl CommandGate {
    pub fn new(
        admins: impl IntoIterator<Item = String>,
        state: Arc<BotState>,
        cooldown: CooldownTracker,
    ) -> Self {
        Self {
            admins: admins.into_iter().collect(),
            state,
            cooldown,
        }
    }

    /// Whether `user` is on the admin allow-list.
    pub fn is_admin(&self, user: &str) -> bool {
        self.admins.contains(user)
    }

    /// Decide whether `user` may run the command described by `descriptor`.
    ///
    /// A passing cooldown check stamps the tracker even if the command later
    /// fails downstream: the cooldown is consumed on attempt, not success.
    pub async fn admit(
        &self,
        user: &str,
        descriptor: &CommandDescriptor,
        now: Instant,
    ) -> Admission {
        let admin = self.is_admin(user);

        // Admins can operate the lights even while the bot is disabled.
        if !self.state.is_enabled() && !admin {
            return Admission::Denied(DenyReason::Disabled);
        }

        if descriptor.permission == Permission::Admin && !admin {
            return Admission::Denied(DenyReason::Unauthorized);
        }

        // Open commands cooldown every caller, admins included; admin-only
        // commands never consult the tracker.
        if descriptor.permission == Permission::Any {
            if let CooldownStatus::TooSoon { remaining } =
                self.cooldown.check_and_stamp(user, now).await
            {
                return Admission::Denied(DenyReason::Cooldown { remaining });
            }
        }

        Admission::Admitted
    }
}
