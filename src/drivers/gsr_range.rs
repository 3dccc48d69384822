//! Shimmer GSR hardware ranges and the running-mode command table.
//!
//! The Shimmer GSR front end switches between four feedback resistors. Each
//! one needs its own calibration curve, so every ADC sample has to be paired
//! with the range it was taken in. `AutoRange` means the firmware picks the
//! resistor itself and reports it alongside each sample.
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::drivers::GsrError;

/// Hardware resistance band. Discriminants are the firmware's range ids.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GsrRange {
    #[serde(rename = "40k")]
    Res40K = 0,
    #[serde(rename = "287k")]
    Res287K = 1,
    #[serde(rename = "1m")]
    Res1M = 2,
    #[serde(rename = "3m3")]
    Res3M3 = 3,
    #[default]
    #[serde(rename = "auto")]
    AutoRange = 4,
}

impl GsrRange {
    /// The four fixed bands, in firmware id order.
    pub const FIXED: [GsrRange; 4] = [
        GsrRange::Res40K,
        GsrRange::Res287K,
        GsrRange::Res1M,
        GsrRange::Res3M3,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            GsrRange::Res40K => "40k",
            GsrRange::Res287K => "287k",
            GsrRange::Res1M => "1m",
            GsrRange::Res3M3 => "3m3",
            GsrRange::AutoRange => "auto",
        }
    }
}

impl TryFrom<u8> for GsrRange {
    type Error = GsrError;
    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(GsrRange::Res40K),
            1 => Ok(GsrRange::Res287K),
            2 => Ok(GsrRange::Res1M),
            3 => Ok(GsrRange::Res3M3),
            4 => Ok(GsrRange::AutoRange),
            other => Err(GsrError::UnknownRange(other)),
        }
    }
}

/// Accepts either the config name (`"287k"`) or the numeric id (`"1"`).
impl FromStr for GsrRange {
    type Err = GsrError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return GsrRange::try_from(id);
        }
        match s.to_ascii_lowercase().as_str() {
            "40k" => Ok(GsrRange::Res40K),
            "287k" => Ok(GsrRange::Res287K),
            "1m" => Ok(GsrRange::Res1M),
            "3m3" => Ok(GsrRange::Res3M3),
            "auto" | "autorange" => Ok(GsrRange::AutoRange),
            _ => Err(GsrError::UnknownRange(u8::MAX)),
        }
    }
}

impl fmt::Display for GsrRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One running-mode command understood by the sensor firmware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunningCommand {
    pub command: u8,
    pub sampling_rate_hz: u16,
    pub range: GsrRange,
}

const fn cmd(command: u8, sampling_rate_hz: u16, range: GsrRange) -> RunningCommand {
    RunningCommand {
        command,
        sampling_rate_hz,
        range,
    }
}

/// Every streaming command with a pinned hardware range. High nibble selects
/// the range, low nibble the sampling frequency.
pub const COMMAND_TABLE: [RunningCommand; 40] = [
    cmd(0x10, 1000, GsrRange::Res40K),
    cmd(0x11, 500, GsrRange::Res40K),
    cmd(0x12, 250, GsrRange::Res40K),
    cmd(0x13, 200, GsrRange::Res40K),
    cmd(0x14, 166, GsrRange::Res40K),
    cmd(0x15, 125, GsrRange::Res40K),
    cmd(0x16, 100, GsrRange::Res40K),
    cmd(0x17, 50, GsrRange::Res40K),
    cmd(0x18, 10, GsrRange::Res40K),
    cmd(0x19, 4, GsrRange::Res40K),
    cmd(0x20, 1000, GsrRange::Res287K),
    cmd(0x21, 500, GsrRange::Res287K),
    cmd(0x22, 250, GsrRange::Res287K),
    cmd(0x23, 200, GsrRange::Res287K),
    cmd(0x24, 166, GsrRange::Res287K),
    cmd(0x25, 125, GsrRange::Res287K),
    cmd(0x26, 100, GsrRange::Res287K),
    cmd(0x27, 50, GsrRange::Res287K),
    cmd(0x28, 10, GsrRange::Res287K),
    cmd(0x29, 4, GsrRange::Res287K),
    cmd(0x30, 1000, GsrRange::Res1M),
    cmd(0x31, 500, GsrRange::Res1M),
    cmd(0x32, 250, GsrRange::Res1M),
    cmd(0x33, 200, GsrRange::Res1M),
    cmd(0x34, 166, GsrRange::Res1M),
    cmd(0x35, 125, GsrRange::Res1M),
    cmd(0x36, 100, GsrRange::Res1M),
    cmd(0x37, 50, GsrRange::Res1M),
    cmd(0x38, 10, GsrRange::Res1M),
    cmd(0x39, 4, GsrRange::Res1M),
    cmd(0x40, 1000, GsrRange::Res3M3),
    cmd(0x41, 500, GsrRange::Res3M3),
    cmd(0x42, 250, GsrRange::Res3M3),
    cmd(0x43, 200, GsrRange::Res3M3),
    cmd(0x44, 166, GsrRange::Res3M3),
    cmd(0x45, 125, GsrRange::Res3M3),
    cmd(0x46, 100, GsrRange::Res3M3),
    cmd(0x47, 50, GsrRange::Res3M3),
    cmd(0x48, 10, GsrRange::Res3M3),
    cmd(0x49, 4, GsrRange::Res3M3),
];

// byte -> index into COMMAND_TABLE
static COMMAND_INDEX: Lazy<[Option<u8>; 256]> = Lazy::new(|| {
    let mut index = [None; 256];
    for (i, entry) in COMMAND_TABLE.iter().enumerate() {
        index[entry.command as usize] = Some(i as u8);
    }
    index
});

pub fn lookup_command(command: u8) -> Option<&'static RunningCommand> {
    COMMAND_INDEX[command as usize].map(|i| &COMMAND_TABLE[i as usize])
}

/// GSR range implied by a running-mode command.
///
/// Total over the byte domain: anything outside [`COMMAND_TABLE`] (stop,
/// auto-ranging modes, garbage) yields `AutoRange`.
pub fn gsr_range_from_command(command: u8) -> GsrRange {
    lookup_command(command)
        .map(|entry| entry.range)
        .unwrap_or(GsrRange::AutoRange)
}

pub fn sampling_rate_from_command(command: u8) -> Option<u16> {
    lookup_command(command).map(|entry| entry.sampling_rate_hz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    #[test]
    fn every_table_command_resolves_to_its_range() {
        for entry in COMMAND_TABLE.iter() {
            assert_eq!(gsr_range_from_command(entry.command), entry.range);
            assert_ne!(entry.range, GsrRange::AutoRange);
        }
    }
    #[test]
    fn table_has_ten_rates_per_fixed_range() {
        let bytes: HashSet<u8> = COMMAND_TABLE.iter().map(|e| e.command).collect();
        assert_eq!(bytes.len(), 40);
        for range in GsrRange::FIXED {
            let rates: HashSet<u16> = COMMAND_TABLE
                .iter()
                .filter(|e| e.range == range)
                .map(|e| e.sampling_rate_hz)
                .collect();
            assert_eq!(rates.len(), 10, "range {range}");
        }
    }
    #[test]
    fn unknown_commands_fall_back_to_autorange() {
        assert_eq!(gsr_range_from_command(0x00), GsrRange::AutoRange);
        assert_eq!(gsr_range_from_command(0xFF), GsrRange::AutoRange);
        assert_eq!(gsr_range_from_command(0x1A), GsrRange::AutoRange);
        assert_eq!(gsr_range_from_command(0x50), GsrRange::AutoRange);
        let known = (0..=u8::MAX)
            .filter(|&b| gsr_range_from_command(b) != GsrRange::AutoRange)
            .count();
        assert_eq!(known, 40);
    }
    #[test]
    fn sampling_rate_lookup() {
        assert_eq!(sampling_rate_from_command(0x10), Some(1000));
        assert_eq!(sampling_rate_from_command(0x34), Some(166));
        assert_eq!(sampling_rate_from_command(0x49), Some(4));
        assert_eq!(sampling_rate_from_command(0x00), None);
    }
    #[test]
    fn range_ids_match_firmware() {
        for id in 0..=4u8 {
            assert_eq!(GsrRange::try_from(id).unwrap().id(), id);
        }
        assert!(matches!(
            GsrRange::try_from(5),
            Err(GsrError::UnknownRange(5))
        ));
    }
    #[test]
    fn range_parses_names_and_ids() {
        assert_eq!("287k".parse::<GsrRange>().unwrap(), GsrRange::Res287K);
        assert_eq!("3M3".parse::<GsrRange>().unwrap(), GsrRange::Res3M3);
        assert_eq!("auto".parse::<GsrRange>().unwrap(), GsrRange::AutoRange);
        assert_eq!("2".parse::<GsrRange>().unwrap(), GsrRange::Res1M);
        assert!("10k".parse::<GsrRange>().is_err());
        assert!("9".parse::<GsrRange>().is_err());
    }
}
