// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Single-device exporter: one client, one private metrics registry

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use tokio::sync::Mutex;

use crate::device::{Lb112xClient, StatusSnapshot};
use crate::error::Result;

use super::labels::{DeviceInfoLabels, WwanInfoLabels};
use super::parsers::parse_reset_required;

pub(crate) const METRIC_PREFIX: &str = "lb112x";

/// Gauges published for one device
struct DeviceMetrics {
    temperature: Gauge,
    temperature_critical: Gauge,
    requires_reset: Gauge,
    rssi: Gauge,
    num_bars: Gauge,
    device_info: Family<DeviceInfoLabels, Gauge>,
    wwan_info: Family<WwanInfoLabels, Gauge>,
}

impl DeviceMetrics {
    fn register(registry: &mut Registry) -> Self {
        let temperature = Gauge::default();
        registry.register(
            "temperature",
            "Temperature of the LB112x device in degrees Celsius",
            temperature.clone(),
        );
        let temperature_critical = Gauge::default();
        registry.register(
            "temperature_critical",
            "Criticality of the LB112x device's temperature (1=critical,0=normal)",
            temperature_critical.clone(),
        );
        let requires_reset = Gauge::default();
        registry.register(
            "requires_reset",
            "Whether the LB112x device requires a reset (1=required,0=not required or not yet reported)",
            requires_reset.clone(),
        );
        let rssi = Gauge::default();
        registry.register(
            "rssi",
            "Strength in RSSI of the LB112x device's cellular signal",
            rssi.clone(),
        );
        let num_bars = Gauge::default();
        registry.register(
            "num_bars",
            "Strength in number of bars of the LB112x device's cellular signal",
            num_bars.clone(),
        );
        let device_info = Family::<DeviceInfoLabels, Gauge>::default();
        registry.register(
            "device_info",
            "Information describing the LB112x device",
            device_info.clone(),
        );
        let wwan_info = Family::<WwanInfoLabels, Gauge>::default();
        registry.register(
            "wwan_info",
            "Information describing the LB112x device's WWAN interface",
            wwan_info.clone(),
        );

        Self {
            temperature,
            temperature_critical,
            requires_reset,
            rssi,
            num_bars,
            device_info,
            wwan_info,
        }
    }
}

/// State only touched while the refresh lock is held
struct ExporterState {
    registry: Registry,
    prev_device_info: Option<DeviceInfoLabels>,
    prev_wwan_info: Option<WwanInfoLabels>,
}

/// Exporter for a single LB112x device
///
/// Owns its client and a registry that is never shared with another
/// device. Refreshes are serialized, so a scrape always serves the values
/// of exactly one complete refresh.
pub struct DeviceExporter {
    target: String,
    client: Lb112xClient,
    metrics: DeviceMetrics,
    state: Mutex<ExporterState>,
}

impl DeviceExporter {
    #[must_use]
    pub fn new(target: impl Into<String>, client: Lb112xClient) -> Self {
        let mut registry = Registry::with_prefix(METRIC_PREFIX);
        let metrics = DeviceMetrics::register(&mut registry);

        Self {
            target: target.into(),
            client,
            metrics,
            state: Mutex::new(ExporterState {
                registry,
                prev_device_info: None,
                prev_wwan_info: None,
            }),
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn client(&self) -> &Lb112xClient {
        &self.client
    }

    /// Logs in, polls, and overwrites every gauge
    ///
    /// On error nothing is updated and the previous values stay exposed.
    ///
    /// # Errors
    ///
    /// Propagates client errors unchanged.
    pub async fn refresh(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        self.refresh_locked(&mut state).await
    }

    /// Refreshes and encodes the registry in OpenMetrics text format
    ///
    /// # Errors
    ///
    /// Propagates client errors unchanged; `AppError::Metrics` if encoding fails.
    pub async fn scrape(&self) -> Result<String> {
        let mut state = self.state.lock().await;
        self.refresh_locked(&mut state).await?;

        let mut buffer = String::new();
        encode(&mut buffer, &state.registry)?;
        Ok(buffer)
    }

    /// Encodes the current values without refreshing
    ///
    /// # Errors
    ///
    /// `AppError::Metrics` if encoding fails.
    pub async fn encode_metrics(&self) -> Result<String> {
        let state = self.state.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &state.registry)?;
        Ok(buffer)
    }

    async fn refresh_locked(&self, state: &mut ExporterState) -> Result<()> {
        self.client.authenticate().await?;
        let snapshot = self.client.poll().await?;
        self.apply(&snapshot, state);
        Ok(())
    }

    fn apply(&self, snapshot: &StatusSnapshot, state: &mut ExporterState) {
        let m = &self.metrics;

        m.temperature.set(snapshot.general.temperature);
        m.temperature_critical
            .set(i64::from(snapshot.power.device_temp_critical));
        match parse_reset_required(&snapshot.power.reset_required) {
            Some(required) => {
                m.requires_reset.set(i64::from(required));
            }
            None => tracing::debug!(
                "Device {} reported unrecognised resetRequired value {:?}",
                self.target,
                snapshot.power.reset_required
            ),
        }
        m.rssi.set(snapshot.wwan.signal_strength.rssi);
        m.num_bars.set(snapshot.wwan.signal_strength.bars);

        let device_info = DeviceInfoLabels::from(snapshot);
        if let Some(prev) = state.prev_device_info.replace(device_info.clone()) {
            if prev != device_info {
                m.device_info.remove(&prev);
            }
        }
        m.device_info.get_or_create(&device_info).set(1);

        let wwan_info = WwanInfoLabels::from(snapshot);
        if let Some(prev) = state.prev_wwan_info.replace(wwan_info.clone()) {
            if prev != wwan_info {
                m.wwan_info.remove(&prev);
            }
        }
        m.wwan_info.get_or_create(&wwan_info).set(1);
    }
}
