// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Rendering of a status snapshot for the `status` command

use crate::device::StatusSnapshot;
use crate::error::Result;

enum Row {
    Section(&'static str),
    Field(&'static str, String),
}

/// Renders a snapshot as an aligned, human readable table
#[must_use]
pub fn render_human(snapshot: &StatusSnapshot) -> String {
    let rows = [
        Row::Section("Device"),
        Row::Field("Model", snapshot.general.model.clone()),
        Row::Field("IMEI", snapshot.general.imei.clone()),
        Row::Section("Network"),
        Row::Field("Name", snapshot.wwan.register_network_display.clone()),
        Row::Field("IP", snapshot.wwan.ip.clone()),
        Row::Field("IPv6", snapshot.wwan.ipv6.clone()),
        Row::Section("Signal"),
        Row::Field("Bars", snapshot.wwan.signal_strength.bars.to_string()),
        Row::Field("RSSI", snapshot.wwan.signal_strength.rssi.to_string()),
        Row::Field(
            "Temperature",
            format!("{}\u{b0}C", snapshot.general.temperature),
        ),
        Row::Field(
            "Temp Critical",
            snapshot.power.device_temp_critical.to_string(),
        ),
    ];

    let width = rows
        .iter()
        .filter_map(|row| match row {
            Row::Field(name, _) => Some(name.len() + 1),
            Row::Section(_) => None,
        })
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in &rows {
        let line = match row {
            Row::Section(title) => format!("{title}\n"),
            Row::Field(name, value) => format!(" {:<width$} {}\n", format!("{name}:"), value),
        };
        out.push_str(&line);
    }
    out
}

/// Renders a snapshot as pretty-printed JSON
///
/// # Errors
///
/// `AppError::Decode` if serialization fails.
pub fn render_json(snapshot: &StatusSnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}
