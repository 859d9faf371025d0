// ABOUTME: Fail-fast broadcast orchestrator - fans one logical command out to
// ABOUTME: the device fleet, consulting the rate limiter before each call.

use std::sync::Arc;
use std::time::Instant;

use super::{Device, DeviceCommand, DeviceSink, Rgb};
use crate::limit::{Acquire, RateLimiter};

/// Result of fanning one instruction out to the device fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastOutcome {
    /// Every device accepted the instruction.
    Success { delivered: usize },

    /// The broadcast aborted partway; `succeeded` devices were reached first.
    PartialFailure { succeeded: usize },
}

impl BroadcastOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BroadcastOutcome::Success { .. })
    }
}

/// Sends logical commands to an ordered device list through an injected sink.
///
/// Broadcasts are fail-fast: the first device failure, rate denial that
/// survives the single retry, or quota exhaustion aborts the remaining
/// devices. A single failure is read as a fleet-level disruption (rate limit
/// or vendor outage), so the remaining calls are skipped rather than
/// spending further quota.
pub struct Orchestrator {
    devices: Vec<Device>,
    sink: Arc<dyn DeviceSink>,
    limiter: Arc<RateLimiter>,
}

impl Orchestrator {
    /// Create an orchestrator over the configured device list, in broadcast order.
    pub fn new(devices: Vec<Device>, sink: Arc<dyn DeviceSink>, limiter: Arc<RateLimiter>) -> Self {
        Self {
            devices,
            sink,
            limiter,
        }
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Send one instruction to every device in order, fail-fast.
    pub async fn broadcast(&self, command: &DeviceCommand) -> BroadcastOutcome {
        let mut succeeded = 0;

        for device in &self.devices {
            if !self.acquire_slot().await {
                tracing::warn!(device = %device.name, succeeded, "broadcast aborted by rate limiter");
                return BroadcastOutcome::PartialFailure { succeeded };
            }

            match self.sink.send(device, command).await {
                Ok(()) => succeeded += 1,
                Err(err) => {
                    tracing::warn!(device = %device.name, error = %err, succeeded, "device call failed, aborting broadcast");
                    return BroadcastOutcome::PartialFailure { succeeded };
                }
            }
        }

        BroadcastOutcome::Success {
            delivered: succeeded,
        }
    }

    /// One rate-limit admission, with at most one bounded wait-and-retry.
    ///
    /// The wait is the window-remaining duration reported by the limiter,
    /// which never exceeds the window period. It suspends only the current
    /// command's task, never event intake.
    async fn acquire_slot(&self) -> bool {
        match self.limiter.try_acquire(Instant::now()).await {
            Acquire::Allowed => true,
            Acquire::QuotaExhausted => false,
            Acquire::Denied { retry_after } => {
                tracing::debug!(?retry_after, "rate window full, waiting once");
                tokio::time::sleep(retry_after).await;
                matches!(
                    self.limiter.try_acquire(Instant::now()).await,
                    Acquire::Allowed
                )
            }
        }
    }

    /// Apply a named color to the fleet.
    ///
    /// Black is a pure blackout: a single brightness-0 broadcast with no
    /// color channel change. Any other color is a color broadcast followed
    /// by a brightness-100 broadcast. The pair is not atomic: if the color
    /// broadcast fails, the brightness broadcast must not run.
    pub async fn set_color(&self, rgb: Rgb) -> BroadcastOutcome {
        if rgb == Rgb::BLACK {
            return self.broadcast(&DeviceCommand::brightness(0)).await;
        }

        let colored = self.broadcast(&DeviceCommand::color(rgb)).await;
        if !colored.is_success() {
            return colored;
        }
        self.broadcast(&DeviceCommand::brightness(100)).await
    }

    /// Turn the fleet on and ramp brightness to full, fail-fast between.
    pub async fn power_on(&self) -> BroadcastOutcome {
        let turned = self.broadcast(&DeviceCommand::turn(true)).await;
        if !turned.is_success() {
            return turned;
        }
        self.broadcast(&DeviceCommand::brightness(100)).await
    }

    /// Turn the fleet off.
    pub async fn power_off(&self) -> BroadcastOutcome {
        self.broadcast(&DeviceCommand::turn(false)).await
    }
}
