// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

use super::OPENMETRICS_CONTENT_TYPE;
use crate::api::AppState;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ScrapeParams {
    pub target: Option<String>,
}

/// GET /scrape?target=<url>
///
/// Logs in to the target, polls it and returns its metrics.
pub async fn scrape_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScrapeParams>,
) -> Response {
    let target = params.target.as_deref();
    let start = Instant::now();
    let result = state.exporters.scrape(target).await;
    let elapsed = start.elapsed();

    match result {
        Ok(metrics_text) => {
            let target = target.unwrap_or_default();
            state.process.record_scrape(target, true, elapsed);
            tracing::info!("Scraped {} in {:.3}s", target, elapsed.as_secs_f64());
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, OPENMETRICS_CONTENT_TYPE)],
                metrics_text,
            )
                .into_response()
        }
        Err(e) => {
            if let Some(target) = target.filter(|t| state.exporters.get(t).is_some()) {
                state.process.record_scrape(target, false, elapsed);
            }
            tracing::warn!("Scrape of {:?} failed: {}", target, e);
            (e.status_code(), error_body(&e)).into_response()
        }
    }
}

fn error_body(error: &AppError) -> String {
    match error {
        AppError::MissingTarget => error.to_string(),
        AppError::UnknownTarget(target) => format!(
            "Could not find target: {target:?}\n\
             \n\
             Was it configured?\n\
             \n\
             This exporter cannot dynamically discover targets, since credentials are\n\
             required for each target. Add the target to the configuration file to\n\
             monitor it.\n"
        ),
        other => format!("Failed polling LB112x device: {other}"),
    }
}
