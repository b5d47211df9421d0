// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for LB112x Exporter application
//!
//! Loads and validates the exporter configuration from a YAML file.

mod duration;

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use crate::device::ClientOptions;
use crate::error::{AppError, Result};

pub use duration::parse_duration;

#[cfg(test)]
mod tests;

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const LISTEN_ADDR: &str = "0.0.0.0:9112";
    pub const DEVICE_URL: &str = "http://192.168.5.1";
    pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(2);
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const DEVICE_URL: &str = "LB112X_URL";
    pub const ADMIN_PASSWORD: &str = "LB112X_ADMIN_PASSWORD";
    pub const CONFIG: &str = "LB112X_CONFIG";
    pub const LISTEN_ADDR: &str = "LB112X_LISTEN";
    pub const INSECURE_SKIP_VERIFY: &str = "LB112X_INSECURE_SKIP_VERIFY";
}

/// Settings shared by every device unless overridden
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalConfig {
    #[serde(default, deserialize_with = "duration::deserialize_opt")]
    pub timeout: Option<Duration>,
    #[serde(default)]
    pub insecure_skip_verify: Option<bool>,
}

/// Configuration for a single LB112x device
#[derive(Clone, Deserialize)]
pub struct DeviceConfig {
    pub url: String,
    pub password: String,
    #[serde(default, deserialize_with = "duration::deserialize_opt")]
    pub timeout: Option<Duration>,
    #[serde(default)]
    pub insecure_skip_verify: Option<bool>,
}

impl std::fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("url", &self.url)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .finish()
    }
}

impl DeviceConfig {
    /// Validates device configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        let url = reqwest::Url::parse(&self.url)
            .map_err(|e| format!("Invalid device URL '{}': {}", self.url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Invalid device URL '{}': expected http or https",
                self.url
            ));
        }

        if self.password.is_empty() {
            return Err(format!("Password cannot be empty for device '{}'", self.url));
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(format!("Timeout must be positive for device '{}'", self.url));
        }

        Ok(())
    }

    /// Client timeout: device override, then global, then the default
    #[must_use]
    pub fn effective_timeout(&self, global: &GlobalConfig) -> Duration {
        self.timeout
            .or(global.timeout)
            .unwrap_or(defaults::CLIENT_TIMEOUT)
    }

    /// Whether TLS verification is skipped for this device
    #[must_use]
    pub fn effective_insecure_skip_verify(&self, global: &GlobalConfig) -> bool {
        self.insecure_skip_verify
            .or(global.insecure_skip_verify)
            .unwrap_or(true)
    }

    /// Client options resolved against the global settings
    #[must_use]
    pub fn client_options(&self, global: &GlobalConfig) -> ClientOptions {
        ClientOptions::default()
            .timeout(self.effective_timeout(global))
            .accept_invalid_certs(self.effective_insecure_skip_verify(global))
    }
}

/// Exporter configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
}

impl Config {
    /// Parses and validates a YAML (or JSON) document
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` on malformed or invalid input.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: Config =
            serde_yaml::from_str(s).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml_str(&content)
    }

    /// Validates the whole configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.devices.is_empty() {
            return Err(AppError::Config("No devices configured".to_string()));
        }

        if self.global.timeout.is_some_and(|t| t.is_zero()) {
            return Err(AppError::Config(
                "Global timeout must be positive".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for device in &self.devices {
            device.validate().map_err(AppError::Config)?;
            if !seen.insert(device.url.as_str()) {
                return Err(AppError::Config(format!(
                    "Device '{}' is configured more than once",
                    device.url
                )));
            }
        }

        Ok(())
    }
}
