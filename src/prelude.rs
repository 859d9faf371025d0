// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use lux::prelude::*;` to get started quickly.

pub use crate::bot::{Bot, render};
pub use crate::chat::{ChatEvent, Replier};
pub use crate::command::{
    Admission, CommandAction, CommandDescriptor, CommandGate, CommandTable, DenyReason,
    DispatchOutcome, Dispatcher, PALETTE, Permission, StatusReport,
};
pub use crate::config::{ChatConfig, Config, GoveeConfig, RateLimitConfig};
pub use crate::device::{
    BroadcastOutcome, CommandName, CommandValue, Device, DeviceCommand, DeviceSink, GoveeClient,
    Orchestrator, PowerState, Rgb,
};
pub use crate::error::{ConfigError, DeviceError, LuxError};
pub use crate::limit::{Acquire, CooldownStatus, CooldownTracker, RateLimiter};
pub use crate::state::BotState;
