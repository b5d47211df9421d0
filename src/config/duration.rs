// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Duration strings in configuration files

use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// Parse a duration string
///
/// Accepts formats like: 2s, 500ms, 1m30s, 1h, and bare numbers as seconds
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration".to_string());
    }

    let mut total = Duration::ZERO;
    let mut chars = s.chars().peekable();
    while chars.peek().is_some() {
        let mut num = String::new();
        while let Some(&ch) = chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            num.push(ch);
            chars.next();
        }
        if num.is_empty() {
            return Err(format!("invalid duration '{s}': expected a number"));
        }

        let mut unit = String::new();
        while let Some(&ch) = chars.peek() {
            if !ch.is_ascii_alphabetic() {
                break;
            }
            unit.push(ch);
            chars.next();
        }

        let value = num
            .parse::<u64>()
            .map_err(|e| format!("invalid duration '{s}': {e}"))?;
        let part = match unit.as_str() {
            // trailing number without unit -> seconds
            "" | "s" => Duration::from_secs(value),
            "ms" => Duration::from_millis(value),
            "m" => Duration::from_secs(value.saturating_mul(60)),
            "h" => Duration::from_secs(value.saturating_mul(3600)),
            other => return Err(format!("invalid duration '{s}': unknown unit '{other}'")),
        };
        total = total.saturating_add(part);
    }
    Ok(total)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Seconds(u64),
    Text(String),
}

/// Deserializes an optional duration given as a string or as whole seconds
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDuration>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawDuration::Seconds(secs)) => Ok(Some(Duration::from_secs(secs))),
        Some(RawDuration::Text(text)) => parse_duration(&text)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
