// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! LB112x device API module
//!
//! Talks to the modem's local HTTP/JSON admin interface: polls the status
//! document and performs the token-based login.

mod client;
mod types;

pub use client::{ClientOptions, Lb112xClient};
pub use types::{GeneralInfo, PowerInfo, SessionInfo, SignalStrength, StatusSnapshot, WwanInfo};
