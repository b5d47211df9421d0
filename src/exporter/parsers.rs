// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Utility functions for metrics processing

/// Parse the firmware's `resetRequired` string
///
/// Returns `None` for values the firmware has not been seen to emit.
pub fn parse_reset_required(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "noresetrequired" | "false" | "no" | "0" => Some(false),
        "resetrequired" | "true" | "yes" | "1" => Some(true),
        _ => None,
    }
}
