// ABOUTME: Defines all error types for the lux library using thiserror.
// ABOUTME: Device and config concerns get their own enums, unified under LuxError.

/// Top-level error type for the lux library.
///
/// Admission denials and rate-limit outcomes are not errors - they are
/// ordinary enum outcomes (`Admission`, `Acquire`) because a denial is an
/// expected result, not a failure.
#[derive(Debug, thiserror::Error)]
pub enum LuxError {
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from device control operations.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The outbound call exceeded the fixed request timeout.
    /// Counts as a device failure and aborts the broadcast.
    #[error("Request timed out")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
