// ABOUTME: Tests for the fail-fast broadcast orchestrator.
// ABOUTME: Uses a recording sink; covers ordering, aborts, and rate limiting.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::orchestrator::{BroadcastOutcome, Orchestrator};
use super::sink::DeviceSink;
use super::types::{CommandName, Device, DeviceCommand, Rgb};
use crate::error::DeviceError;
use crate::limit::RateLimiter;
use crate::state::BotState;

/// Records every call; fails once it reaches the named device.
struct RecordingSink {
    calls: Mutex<Vec<(String, DeviceCommand)>>,
    fail_on: Option<String>,
}

impl RecordingSink {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_on: None,
        })
    }

    fn failing_on(device_id: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(device_id.to_string()),
        })
    }

    async fn calls(&self) -> Vec<(String, DeviceCommand)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl DeviceSink for RecordingSink {
    async fn send(&self, device: &Device, command: &DeviceCommand) -> Result<(), DeviceError> {
        self.calls
            .lock()
            .await
            .push((device.device_id.clone(), *command));
        if self.fail_on.as_deref() == Some(device.device_id.as_str()) {
            return Err(DeviceError::Api {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(())
    }
}

fn devices(n: usize) -> Vec<Device> {
    (1..=n)
        .map(|i| Device {
            device_id: format!("dev{}", i),
            model: "H6195".to_string(),
            name: format!("Light {}", i),
        })
        .collect()
}

fn limiter(max: usize, period: Duration, ceiling: u64) -> (Arc<RateLimiter>, Arc<BotState>) {
    let bot = Arc::new(BotState::new());
    (
        Arc::new(RateLimiter::new(max, period, ceiling, bot.clone())),
        bot,
    )
}

fn orchestrator(
    n: usize,
    sink: Arc<RecordingSink>,
    limiter: Arc<RateLimiter>,
) -> Orchestrator {
    Orchestrator::new(devices(n), sink, limiter)
}

#[tokio::test]
async fn broadcast_reaches_all_devices_in_order() {
    let sink = RecordingSink::new();
    let (limiter, _) = limiter(100, Duration::from_secs(60), 1000);
    let orch = orchestrator(3, sink.clone(), limiter);

    let outcome = orch.broadcast(&DeviceCommand::turn(true)).await;
    assert_eq!(outcome, BroadcastOutcome::Success { delivered: 3 });

    let calls = sink.calls().await;
    let ids: Vec<_> = calls.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["dev1", "dev2", "dev3"]);
}

#[tokio::test]
async fn first_failure_aborts_remaining_devices() {
    let sink = RecordingSink::failing_on("dev2");
    let (limiter, _) = limiter(100, Duration::from_secs(60), 1000);
    let orch = orchestrator(3, sink.clone(), limiter);

    let outcome = orch.broadcast(&DeviceCommand::turn(true)).await;
    assert_eq!(outcome, BroadcastOutcome::PartialFailure { succeeded: 1 });

    // Device 3 must receive zero calls.
    let calls = sink.calls().await;
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|(id, _)| id != "dev3"));
}

#[tokio::test]
async fn set_color_sends_color_then_full_brightness() {
    let sink = RecordingSink::new();
    let (limiter, _) = limiter(100, Duration::from_secs(60), 1000);
    let orch = orchestrator(2, sink.clone(), limiter);

    let outcome = orch.set_color(Rgb::new(255, 0, 0)).await;
    assert_eq!(outcome, BroadcastOutcome::Success { delivered: 2 });

    let calls = sink.calls().await;
    let shapes: Vec<_> = calls
        .iter()
        .map(|(id, cmd)| (id.as_str(), cmd.name))
        .collect();
    assert_eq!(
        shapes,
        vec![
            ("dev1", CommandName::Color),
            ("dev2", CommandName::Color),
            ("dev1", CommandName::Brightness),
            ("dev2", CommandName::Brightness),
        ]
    );
}

#[tokio::test]
async fn black_is_a_single_brightness_zero_broadcast() {
    let sink = RecordingSink::new();
    let (limiter, _) = limiter(100, Duration::from_secs(60), 1000);
    let orch = orchestrator(2, sink.clone(), limiter);

    let outcome = orch.set_color(Rgb::BLACK).await;
    assert_eq!(outcome, BroadcastOutcome::Success { delivered: 2 });

    let calls = sink.calls().await;
    assert_eq!(calls.len(), 2);
    for (_, cmd) in &calls {
        assert_eq!(*cmd, DeviceCommand::brightness(0));
    }
}

#[tokio::test]
async fn failed_color_broadcast_skips_brightness() {
    let sink = RecordingSink::failing_on("dev1");
    let (limiter, _) = limiter(100, Duration::from_secs(60), 1000);
    let orch = orchestrator(2, sink.clone(), limiter);

    let outcome = orch.set_color(Rgb::new(0, 255, 0)).await;
    assert_eq!(outcome, BroadcastOutcome::PartialFailure { succeeded: 0 });

    let calls = sink.calls().await;
    assert!(calls.iter().all(|(_, cmd)| cmd.name == CommandName::Color));
}

#[tokio::test]
async fn power_on_ramps_brightness_after_turn() {
    let sink = RecordingSink::new();
    let (limiter, _) = limiter(100, Duration::from_secs(60), 1000);
    let orch = orchestrator(1, sink.clone(), limiter);

    let outcome = orch.power_on().await;
    assert_eq!(outcome, BroadcastOutcome::Success { delivered: 1 });

    let calls = sink.calls().await;
    assert_eq!(calls[0].1, DeviceCommand::turn(true));
    assert_eq!(calls[1].1, DeviceCommand::brightness(100));
}

#[tokio::test]
async fn power_off_is_a_single_broadcast() {
    let sink = RecordingSink::new();
    let (limiter, _) = limiter(100, Duration::from_secs(60), 1000);
    let orch = orchestrator(2, sink.clone(), limiter);

    let outcome = orch.power_off().await;
    assert_eq!(outcome, BroadcastOutcome::Success { delivered: 2 });

    let calls = sink.calls().await;
    assert_eq!(calls.len(), 2);
    for (_, cmd) in &calls {
        assert_eq!(*cmd, DeviceCommand::turn(false));
    }
}

#[tokio::test]
async fn rate_denial_waits_once_then_proceeds() {
    // Window of one per 50ms: the second device is denied, waits the
    // window out once, and succeeds on the retry.
    let sink = RecordingSink::new();
    let (limiter, _) = limiter(1, Duration::from_millis(50), 1000);
    let orch = orchestrator(2, sink.clone(), limiter);

    let outcome = orch.broadcast(&DeviceCommand::turn(true)).await;
    assert_eq!(outcome, BroadcastOutcome::Success { delivered: 2 });
    assert_eq!(sink.calls().await.len(), 2);
}

#[tokio::test]
async fn quota_exhaustion_aborts_mid_broadcast() {
    let sink = RecordingSink::new();
    let (limiter, bot) = limiter(100, Duration::from_secs(60), 1);
    let orch = orchestrator(3, sink.clone(), limiter);

    let outcome = orch.broadcast(&DeviceCommand::turn(true)).await;
    assert_eq!(outcome, BroadcastOutcome::PartialFailure { succeeded: 1 });
    assert_eq!(sink.calls().await.len(), 1);
    assert!(!bot.is_enabled());
}
