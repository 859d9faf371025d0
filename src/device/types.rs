// ABOUTME: Device and instruction types matching the vendor wire schema.
// ABOUTME: One DeviceCommand is one channel (turn/brightness/color) plus its value.

use serde::{Deserialize, Serialize};

/// A controllable lighting device. Loaded once from configuration and
/// read-only for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    pub device_id: String,
    pub model: String,
    pub name: String,
}

/// An RGB color triple, each channel 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Vendor command channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandName {
    Turn,
    Brightness,
    Color,
}

/// Power switch value, serialized as `"on"` / `"off"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    Off,
}

/// Vendor command value: a power string, a 0-100 brightness level, or a
/// color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandValue {
    Power(PowerState),
    Level(u8),
    Color(Rgb),
}

/// One instruction for one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceCommand {
    pub name: CommandName,
    pub value: CommandValue,
}

impl DeviceCommand {
    /// Power the device on or off.
    pub fn turn(on: bool) -> Self {
        Self {
            name: CommandName::Turn,
            value: CommandValue::Power(if on { PowerState::On } else { PowerState::Off }),
        }
    }

    /// Set brightness. Levels above 100 are clamped to the wire maximum.
    pub fn brightness(level: u8) -> Self {
        Self {
            name: CommandName::Brightness,
            value: CommandValue::Level(level.min(100)),
        }
    }

    /// Set the color channels.
    pub fn color(rgb: Rgb) -> Self {
        Self {
            name: CommandName::Color,
            value: CommandValue::Color(rgb),
        }
    }
}
