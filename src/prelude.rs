// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use lb112x_exporter::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, DeviceConfig, GlobalConfig};
pub use crate::error::{AppError, Result};

// Exporters
pub use crate::exporter::{
    DeviceExporter, DeviceInfoLabels, ExporterRegistry, ProcessMetrics, TargetLabels,
    WwanInfoLabels,
};

// LB112x client
pub use crate::device::{ClientOptions, Lb112xClient, StatusSnapshot};
