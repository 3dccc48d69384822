// src/types.rs
use std::fmt;

use crate::drivers::GsrRange;

// One GSR reading as decoded from a device packet
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct GsrSample {
    pub adc: i32,
    pub reported_range: GsrRange, // range tag sent by the firmware
}

impl GsrSample {
    pub fn new(adc: i32, reported_range: GsrRange) -> Self {
        Self {
            adc,
            reported_range,
        }
    }
}

// Sensor link state as published by the connection layer
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ConnectionStatus {
    Idle,
    Connecting,
    Connected,
    Paired,
    Error,
}

impl ConnectionStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ConnectionStatus::Idle),
            1 => Some(ConnectionStatus::Connecting),
            2 => Some(ConnectionStatus::Connected),
            3 => Some(ConnectionStatus::Paired),
            4 => Some(ConnectionStatus::Error),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            ConnectionStatus::Idle => 0,
            ConnectionStatus::Connecting => 1,
            ConnectionStatus::Connected => 2,
            ConnectionStatus::Paired => 3,
            ConnectionStatus::Error => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Idle => "Idle",
            ConnectionStatus::Connecting => "Connecting",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Paired => "Paired but not connected",
            ConnectionStatus::Error => "Error",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for a raw status code; empty for codes the connection layer doesn't define.
pub fn connection_status_label(code: i32) -> &'static str {
    ConnectionStatus::from_code(code)
        .map(ConnectionStatus::label)
        .unwrap_or("")
}
