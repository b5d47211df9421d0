// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for LB112x Exporter application

use axum::http::StatusCode;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Network, connection or timeout failure while talking to the device
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Device answered with a body that is not the expected JSON
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Login form was rejected with a non-2xx status
    #[error("Failed to log in: {status}")]
    AuthenticationFailed { status: reqwest::StatusCode },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scrape request without a `target` parameter
    #[error("No target specified, not sure what you want.")]
    MissingTarget,

    /// Scrape request for a target that is not configured
    #[error("Could not find target: {0:?}")]
    UnknownTarget(String),

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Network or IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl AppError {
    /// HTTP status used when this error ends a scrape request
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingTarget => StatusCode::BAD_REQUEST,
            Self::UnknownTarget(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(error: std::fmt::Error) -> Self {
        Self::Metrics(error.to_string())
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
