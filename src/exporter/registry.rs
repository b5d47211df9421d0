// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Exporter registry: target URL to device exporter

use std::collections::HashMap;

use crate::config::Config;
use crate::device::Lb112xClient;
use crate::error::{AppError, Result};

use super::device::DeviceExporter;

/// Static map of configured targets
///
/// Built once from configuration. Targets cannot be discovered at runtime
/// because every device needs its own credentials.
pub struct ExporterRegistry {
    exporters: HashMap<String, DeviceExporter>,
}

impl ExporterRegistry {
    /// Builds one exporter per configured device
    ///
    /// # Errors
    ///
    /// `AppError::Config` for duplicate targets, or a client construction error.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut exporters = HashMap::with_capacity(config.devices.len());
        for device in &config.devices {
            let options = device.client_options(&config.global);
            tracing::debug!(
                "Configuring target {} (timeout {:?}, skip TLS verify {})",
                device.url,
                options.get_timeout(),
                options.get_accept_invalid_certs()
            );
            let client = Lb112xClient::new(&device.url, &device.password, options)?;
            let exporter = DeviceExporter::new(device.url.clone(), client);
            if exporters.insert(device.url.clone(), exporter).is_some() {
                return Err(AppError::Config(format!(
                    "Device '{}' is configured more than once",
                    device.url
                )));
            }
        }
        Ok(Self { exporters })
    }

    /// Builds a registry from already constructed exporters
    #[must_use]
    pub fn from_exporters(exporters: impl IntoIterator<Item = DeviceExporter>) -> Self {
        Self {
            exporters: exporters
                .into_iter()
                .map(|e| (e.target().to_string(), e))
                .collect(),
        }
    }

    /// Configured target URLs, sorted
    #[must_use]
    pub fn targets(&self) -> Vec<String> {
        let mut targets: Vec<String> = self.exporters.keys().cloned().collect();
        targets.sort();
        targets
    }

    #[must_use]
    pub fn get(&self, target: &str) -> Option<&DeviceExporter> {
        self.exporters.get(target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exporters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exporters.is_empty()
    }

    /// Refreshes the exporter for `target` and encodes its metrics
    ///
    /// # Errors
    ///
    /// `AppError::MissingTarget` for a missing or empty target,
    /// `AppError::UnknownTarget` if it is not configured, otherwise whatever
    /// the device exporter returns.
    pub async fn scrape(&self, target: Option<&str>) -> Result<String> {
        let target = match target {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AppError::MissingTarget),
        };
        let exporter = self
            .exporters
            .get(target)
            .ok_or_else(|| AppError::UnknownTarget(target.to_string()))?;
        exporter.scrape().await
    }
}
