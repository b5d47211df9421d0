// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prometheus exporters for LB112x devices
//!
//! One [`DeviceExporter`] per configured device, looked up by target URL
//! through the [`ExporterRegistry`], plus the process-level metrics.

mod device;
mod labels;
mod parsers;
mod process;
mod registry;

pub use device::DeviceExporter;
pub use labels::{DeviceInfoLabels, TargetLabels, WwanInfoLabels};
pub use process::ProcessMetrics;
pub use registry::ExporterRegistry;
