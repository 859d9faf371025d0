// ABOUTME: Immutable startup configuration - chat settings, device fleet, rate limits.
// ABOUTME: Loaded once from JSON, validated, and passed by reference into components.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::device::Device;
use crate::error::ConfigError;

fn default_prefix() -> String {
    "!".to_string()
}

fn default_request_timeout_secs() -> u64 {
    5
}

fn default_quota_ceiling() -> u64 {
    10_000
}

/// Chat-side configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Command prefix, e.g. `!red`.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Users allowed to run admin commands. Lowercased during load.
    pub admin_users: Vec<String>,
}

/// Device-vendor configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GoveeConfig {
    /// API key. May be overridden by the `GOVEE_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: String,

    /// Devices to control, in broadcast order.
    pub devices: Vec<Device>,

    /// Fixed timeout for each outbound device call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Rate limiting and cooldown configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum outbound calls per sliding window.
    pub max_requests: usize,

    /// Sliding window length, in seconds.
    pub period_secs: u64,

    /// Minimum interval between a user's accepted commands, in seconds.
    pub user_cooldown_secs: u64,

    /// Hard lifetime cap on outbound calls. Never resets during a process lifetime.
    #[serde(default = "default_quota_ceiling")]
    pub quota_ceiling: u64,
}

/// Full startup configuration.
///
/// Constructed once and treated as read-only for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub chat: ChatConfig,
    pub govee: GoveeConfig,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// Normalizes admin identifiers to lowercase, applies the
    /// `GOVEE_API_KEY` environment override, and validates the result.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Load configuration from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_json::from_str(raw)?;

        // Identity comparisons are case-insensitive; normalize once here
        // rather than at each comparison site.
        for admin in &mut config.chat.admin_users {
            *admin = admin.to_lowercase();
        }

        if let Ok(key) = std::env::var("GOVEE_API_KEY") {
            config.govee.api_key = key;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.govee.devices.is_empty() {
            return Err(ConfigError::Invalid("no devices configured".to_string()));
        }
        if self.govee.api_key.is_empty() {
            return Err(ConfigError::Invalid("missing API key".to_string()));
        }
        if self.rate_limit.max_requests == 0 {
            return Err(ConfigError::Invalid("max_requests must be positive".to_string()));
        }
        if self.rate_limit.period_secs == 0 {
            return Err(ConfigError::Invalid("period_secs must be positive".to_string()));
        }
        if self.rate_limit.quota_ceiling == 0 {
            return Err(ConfigError::Invalid("quota_ceiling must be positive".to_string()));
        }
        Ok(())
    }

    /// Sliding window length.
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.rate_limit.period_secs)
    }

    /// Per-user cooldown interval.
    pub fn user_cooldown(&self) -> Duration {
        Duration::from_secs(self.rate_limit.user_cooldown_secs)
    }

    /// Outbound device call timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.govee.request_timeout_secs)
    }
}
