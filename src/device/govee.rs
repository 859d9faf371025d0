// ABOUTME: Govee API client implementation.
// ABOUTME: Implements DeviceSink against the v1 device control endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{Device, DeviceCommand, DeviceSink};
use crate::error::DeviceError;

const GOVEE_CONTROL_URL: &str = "https://developer-api.govee.com/v1/devices/control";

/// Govee control request format.
#[derive(Debug, Serialize)]
struct GoveeControlRequest<'a> {
    device: &'a str,
    model: &'a str,
    cmd: &'a DeviceCommand,
}

/// Govee response envelope, shared by success and error bodies.
#[derive(Debug, Deserialize)]
struct GoveeResponse {
    code: i64,
    message: String,
}

/// Client for the Govee device control API.
#[derive(Debug, Clone)]
pub struct GoveeClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl GoveeClient {
    /// Create a new Govee client with the given API key.
    ///
    /// Every outbound call is bounded by `timeout`, which is distinct from
    /// any rate-limit wait the caller may apply.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            api_key: api_key.into(),
            base_url: GOVEE_CONTROL_URL.to_string(),
            http,
        }
    }

    /// Create a new Govee client from the GOVEE_API_KEY environment variable.
    pub fn from_env(timeout: Duration) -> Result<Self, DeviceError> {
        let api_key = std::env::var("GOVEE_API_KEY").map_err(|_| {
            DeviceError::Configuration("GOVEE_API_KEY environment variable not set".to_string())
        })?;
        Ok(Self::new(api_key, timeout))
    }

    /// Override the control endpoint URL (testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

fn classify(err: reqwest::Error) -> DeviceError {
    if err.is_timeout() {
        DeviceError::Timeout
    } else {
        DeviceError::Http(err)
    }
}

#[async_trait]
impl DeviceSink for GoveeClient {
    async fn send(&self, device: &Device, command: &DeviceCommand) -> Result<(), DeviceError> {
        let body = GoveeControlRequest {
            device: &device.device_id,
            model: &device.model,
            cmd: command,
        };

        tracing::debug!(device = %device.name, command = ?command.name, "sending device instruction");

        let response = self
            .http
            .put(&self.base_url)
            .header("Govee-API-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<GoveeResponse>().await {
                Ok(envelope) => envelope.message,
                Err(_) => String::new(),
            };
            tracing::warn!(device = %device.name, status = status.as_u16(), %message, "device call rejected");
            return Err(DeviceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // The vendor reports some failures inside a 200 envelope.
        let envelope: GoveeResponse = response.json().await.map_err(classify)?;
        if envelope.code != 200 {
            tracing::warn!(device = %device.name, code = envelope.code, message = %envelope.message, "device reported failure");
            return Err(DeviceError::Api {
                status: status.as_u16(),
                message: envelope.message,
            });
        }

        Ok(())
    }
}
