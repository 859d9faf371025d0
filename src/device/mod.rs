// ABOUTME: Device module - instruction types, the vendor sink seam, and the
// ABOUTME: fail-fast broadcast orchestrator.

mod govee;
mod orchestrator;
mod sink;
mod types;

pub use govee::GoveeClient;
pub use orchestrator::{BroadcastOutcome, Orchestrator};
pub use sink::DeviceSink;
pub use types::{CommandName, CommandValue, Device, DeviceCommand, PowerState, Rgb};

#[cfg(test)]
mod orchestrator_test;
