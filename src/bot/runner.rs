// ABOUTME: The bot runner - consumes chat events and drives the dispatcher.
// ABOUTME: Each command runs on its own task so broadcasts never stall intake.

use std::sync::Arc;

use futures::{Stream, StreamExt};

use crate::chat::{ChatEvent, Replier};
use crate::command::{DispatchOutcome, Dispatcher, StatusReport};

/// Drives the dispatch stack from a stream of chat events.
pub struct Bot {
    dispatcher: Arc<Dispatcher>,
    replier: Arc<dyn Replier>,
    prefix: String,
}

impl Bot {
    pub fn new(
        dispatcher: Arc<Dispatcher>,
        replier: Arc<dyn Replier>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            dispatcher,
            replier,
            prefix: prefix.into(),
        }
    }

    /// Consume the event stream until it ends.
    ///
    /// Parsing happens inline in arrival order; each resolved command is
    /// then handled on its own task, so a broadcast's bounded rate-limit
    /// wait suspends only that command, never event intake.
    pub async fn run<S>(&self, mut events: S)
    where
        S: Stream<Item = ChatEvent> + Unpin,
    {
        while let Some(event) = events.next().await {
            let Some(token) = parse_token(&event.text, &self.prefix) else {
                continue;
            };

            tracing::debug!(user = %event.user, %token, "command received");

            let dispatcher = self.dispatcher.clone();
            let replier = self.replier.clone();
            tokio::spawn(async move {
                let outcome = dispatcher.handle(&event.user, &token, event.at).await;
                if let Some(text) = render(&outcome) {
                    if let Err(err) = replier.reply(&text).await {
                        tracing::warn!(error = %err, "reply failed");
                    }
                }
            });
        }
    }
}

/// Extract the command token from a prefixed message: `!red` -> `red`.
/// Anything after the first word is ignored.
pub(crate) fn parse_token(text: &str, prefix: &str) -> Option<String> {
    let rest = text.trim().strip_prefix(prefix)?;
    let token = rest.split_whitespace().next()?;
    Some(token.to_string())
}

/// Render an outcome to reply text. `None` means stay silent.
///
/// Denials and broadcast failures are deliberately silent toward chat:
/// unauthorized attempts never get a reply that would confirm who the
/// admins are, and the others are already logged where they occur.
pub fn render(outcome: &DispatchOutcome) -> Option<String> {
    match outcome {
        DispatchOutcome::ColorSet { color } if color == "black" => {
            Some("All lights turned off".to_string())
        }
        DispatchOutcome::ColorSet { color } => Some(format!("All lights set to {}!", color)),
        DispatchOutcome::PoweredOn => Some("All lights turned on!".to_string()),
        DispatchOutcome::PoweredOff => Some("All lights turned off.".to_string()),
        DispatchOutcome::Enabled => {
            Some("Commands ENABLED - color commands are now active!".to_string())
        }
        DispatchOutcome::Disabled => {
            Some("Commands DISABLED - color commands are now inactive".to_string())
        }
        DispatchOutcome::Status(report) => Some(render_status(report)),
        DispatchOutcome::BroadcastFailed { .. }
        | DispatchOutcome::Denied(_)
        | DispatchOutcome::Ignored => None,
    }
}

fn render_status(report: &StatusReport) -> String {
    let state = if report.enabled { "ONLINE" } else { "OFFLINE" };
    let secs = report.uptime.as_secs();
    format!(
        "{} | Uptime: {:02}:{:02}:{:02}\nAPI uses: {}/{} ({} remaining)\nAdmins: {}",
        state,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60,
        report.total_requests,
        report.quota_ceiling,
        report.remaining(),
        report.admins.join(", ")
    )
}
