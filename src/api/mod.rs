// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for LB112x Exporter
//!
//! # Endpoints
//! - `GET /scrape?target=<url>` - refresh and export one device
//! - `GET /metrics` - exporter process metrics
//! - `GET /health` - health check

pub mod handlers;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::exporter::{ExporterRegistry, ProcessMetrics};

/// Application state shared with endpoints
pub struct AppState {
    pub exporters: ExporterRegistry,
    pub process: ProcessMetrics,
}

impl AppState {
    /// Wraps the exporters and zero-initializes per-target process counters
    #[must_use]
    pub fn new(exporters: ExporterRegistry) -> Self {
        let process = ProcessMetrics::new();
        for target in exporters.targets() {
            process.initialize_target(&target);
        }
        Self { exporters, process }
    }
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/scrape", get(handlers::scrape_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
