// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Status model returned by `/api/model.json`
//!
//! Field names follow the keys emitted by the modem firmware. Every field
//! defaults when absent, since firmware revisions omit sections freely.

use serde::{Deserialize, Serialize};

/// General device information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralInfo {
    pub model: String,
    #[serde(rename = "verMajor")]
    pub version_major: i64,
    #[serde(rename = "verMinor")]
    pub version_minor: i64,
    #[serde(rename = "HWversion")]
    pub hardware_version: String,
    #[serde(rename = "FWversion")]
    pub firmware_version: String,
    #[serde(rename = "appVersion")]
    pub app_version: String,
    #[serde(rename = "webAppVersion")]
    pub web_app_version: String,
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    #[serde(rename = "BLversion")]
    pub bootloader_version: String,
    #[serde(rename = "IMEI")]
    pub imei: String,
    /// Degrees Celsius
    #[serde(rename = "devTemperature")]
    pub temperature: i64,
}

/// Power and thermal state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerInfo {
    #[serde(rename = "deviceTempCritical")]
    pub device_temp_critical: bool,
    /// Raw firmware string, e.g. `NoResetRequired`
    #[serde(rename = "resetRequired")]
    pub reset_required: String,
}

/// Web session information, including the login token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionInfo {
    #[serde(rename = "userRole")]
    pub user_role: String,
    #[serde(rename = "lang")]
    pub language: String,
    #[serde(rename = "secToken")]
    pub security_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalStrength {
    pub rssi: i64,
    pub rscp: i64,
    pub ecio: i64,
    pub rsrp: i64,
    pub rsrq: i64,
    pub bars: i64,
    #[serde(rename = "SINR")]
    pub sinr: i64,
}

/// Cellular (WWAN) interface state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WwanInfo {
    #[serde(rename = "IP")]
    pub ip: String,
    #[serde(rename = "IPv6")]
    pub ipv6: String,
    #[serde(rename = "registerNetworkDisplay")]
    pub register_network_display: String,
    #[serde(rename = "signalStrength")]
    pub signal_strength: SignalStrength,
}

/// Complete status payload from a single poll
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSnapshot {
    pub general: GeneralInfo,
    pub power: PowerInfo,
    pub session: SessionInfo,
    pub wwan: WwanInfo,
}
