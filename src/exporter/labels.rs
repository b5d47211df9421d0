// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

use crate::device::StatusSnapshot;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct DeviceInfoLabels {
    pub model: String,
    pub imei: String,
    pub hw: String,
    pub fw: String,
    pub sw: String,
}

impl From<&StatusSnapshot> for DeviceInfoLabels {
    fn from(snapshot: &StatusSnapshot) -> Self {
        let general = &snapshot.general;
        Self {
            model: general.model.clone(),
            imei: general.imei.clone(),
            hw: general.hardware_version.clone(),
            fw: general.firmware_version.clone(),
            sw: general.app_version.clone(),
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct WwanInfoLabels {
    pub network: String,
    pub ipv4: String,
    pub ipv6: String,
}

impl From<&StatusSnapshot> for WwanInfoLabels {
    fn from(snapshot: &StatusSnapshot) -> Self {
        let wwan = &snapshot.wwan;
        Self {
            network: wwan.register_network_display.clone(),
            ipv4: wwan.ip.clone(),
            ipv6: wwan.ipv6.clone(),
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct TargetLabels {
    pub target: String,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct VersionLabels {
    pub version: String,
}
