// ABOUTME: Defines the DeviceSink trait - the outbound seam to the device
// ABOUTME: vendor's control API, injected into the orchestrator.

use async_trait::async_trait;

use super::{Device, DeviceCommand};
use crate::error::DeviceError;

/// Trait for device control implementations.
///
/// One call delivers one instruction to one device. Implementations must
/// bound each call with a fixed timeout; a timeout is reported as
/// [`DeviceError::Timeout`] and counts as that device's failure.
#[async_trait]
pub trait DeviceSink: Send + Sync {
    /// Deliver one instruction to one device.
    async fn send(&self, device: &Device, command: &DeviceCommand) -> Result<(), DeviceError>;
}
