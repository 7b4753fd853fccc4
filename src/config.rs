// src/config.rs

//! Client configuration: the endpoint and timing knobs handed to the driver.

use crate::core::errors::CitrineError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
use url::Url;

const DEFAULT_URL: &str = "citrine://127.0.0.1:7401";

/// Connection settings for the driver plus the client's own timing guard.
///
/// The endpoint and `connect_timeout` are consumed by the driver when it
/// establishes the connection; `command_timeout` is enforced by
/// [`crate::client::Client`] around every dispatch.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint of the store, e.g. `citrine://127.0.0.1:7401`.
    #[serde(default = "default_url")]
    pub url: Url,

    /// How long the driver may spend establishing a connection.
    #[serde(with = "humantime_serde", default = "default_connect_timeout")]
    pub connect_timeout: Duration,

    /// Upper bound on a single command round trip. Unset disables the guard.
    #[serde(with = "humantime_serde", default)]
    pub command_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            url: default_url(),
            connect_timeout: default_connect_timeout(),
            command_timeout: None,
        }
    }
}

fn default_url() -> Url {
    Url::parse(DEFAULT_URL).expect("default endpoint URL is valid")
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(5)
}

impl ClientConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{path}'"))?;
        let config: ClientConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from '{path}'"))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects endpoints and timeouts the driver could not honor.
    pub fn validate(&self) -> std::result::Result<(), CitrineError> {
        if self.url.scheme() != "citrine" {
            return Err(CitrineError::InvalidConfig(format!(
                "unsupported URL scheme '{}'",
                self.url.scheme()
            )));
        }
        if self.url.host_str().is_none() {
            return Err(CitrineError::InvalidConfig(
                "endpoint URL has no host".to_string(),
            ));
        }
        if self.connect_timeout.is_zero() {
            return Err(CitrineError::InvalidConfig(
                "connect_timeout must be non-zero".to_string(),
            ));
        }
        if let Some(timeout) = self.command_timeout
            && timeout.is_zero()
        {
            return Err(CitrineError::InvalidConfig(
                "command_timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
