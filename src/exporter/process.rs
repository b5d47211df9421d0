// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Process-level metrics served on `/metrics`
//!
//! Kept in a registry of their own so they never mix with device series.

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::time::Duration;

use crate::error::Result;

use super::device::METRIC_PREFIX;
use super::labels::{TargetLabels, VersionLabels};

pub struct ProcessMetrics {
    registry: Registry,
    scrape_success: Family<TargetLabels, Counter>,
    scrape_errors: Family<TargetLabels, Counter>,
    scrape_duration_milliseconds: Family<TargetLabels, Gauge>,
}

impl Default for ProcessMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessMetrics {
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Registry::with_prefix(METRIC_PREFIX);

        let version = Family::<VersionLabels, Gauge>::default();
        registry.register(
            "exporter_version",
            "Version information about this binary",
            version.clone(),
        );
        version
            .get_or_create(&VersionLabels {
                version: env!("CARGO_PKG_VERSION").to_string(),
            })
            .set(1);

        let scrape_success = Family::<TargetLabels, Counter>::default();
        registry.register(
            "exporter_scrape_success",
            "Successful scrapes per target",
            scrape_success.clone(),
        );
        let scrape_errors = Family::<TargetLabels, Counter>::default();
        registry.register(
            "exporter_scrape_errors",
            "Failed scrapes per target",
            scrape_errors.clone(),
        );
        let scrape_duration_milliseconds = Family::<TargetLabels, Gauge>::default();
        registry.register(
            "exporter_scrape_duration_milliseconds",
            "Duration of the last scrape per target in milliseconds",
            scrape_duration_milliseconds.clone(),
        );

        Self {
            registry,
            scrape_success,
            scrape_errors,
            scrape_duration_milliseconds,
        }
    }

    /// Initialize per-target counters to zero
    ///
    /// Lets Prometheus compute rates before the first success or error.
    pub fn initialize_target(&self, target: &str) {
        let labels = TargetLabels {
            target: target.to_string(),
        };
        let _ = self.scrape_success.get_or_create(&labels);
        let _ = self.scrape_errors.get_or_create(&labels);
    }

    pub fn record_scrape(&self, target: &str, success: bool, duration: Duration) {
        let labels = TargetLabels {
            target: target.to_string(),
        };
        if success {
            self.scrape_success.get_or_create(&labels).inc();
        } else {
            self.scrape_errors.get_or_create(&labels).inc();
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let millis = duration.as_millis() as i64;
        self.scrape_duration_milliseconds
            .get_or_create(&labels)
            .set(millis);
    }

    #[must_use]
    pub fn scrape_success_count(&self, target: &str) -> u64 {
        self.scrape_success
            .get_or_create(&TargetLabels {
                target: target.to_string(),
            })
            .get()
    }

    #[must_use]
    pub fn scrape_error_count(&self, target: &str) -> u64 {
        self.scrape_errors
            .get_or_create(&TargetLabels {
                target: target.to_string(),
            })
            .get()
    }

    /// # Errors
    ///
    /// `AppError::Metrics` if encoding fails.
    pub fn encode_metrics(&self) -> Result<String> {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry)?;
        Ok(buffer)
    }
}
