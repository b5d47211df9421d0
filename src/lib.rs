// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # LB112x Exporter
//!
//! Prometheus exporter for Netgear LB112x LTE modems.
//!
//! This library logs in to the modem's local HTTP/JSON API, polls its
//! status document and exposes selected fields in Prometheus format, one
//! private registry per configured device.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `config`: configuration management
//! - `device`: LB112x device API client and status model
//! - `error`: error types
//! - `exporter`: per-device exporters and the target registry
//! - `report`: human readable status output
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod device;
mod error;
mod exporter;
pub mod prelude;
pub mod report;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, DeviceConfig, GlobalConfig, defaults, env_vars, parse_duration};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Device exporters and process metrics
pub use exporter::{DeviceExporter, ExporterRegistry, ProcessMetrics};

/// LB112x API client and status model
pub use device::{
    ClientOptions, GeneralInfo, Lb112xClient, PowerInfo, SessionInfo, SignalStrength,
    StatusSnapshot, WwanInfo,
};
