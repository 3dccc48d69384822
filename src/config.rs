use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::drivers::{gsr_range_from_command, GsrError, GsrRange};

/// Converter settings, loaded from JSON.
///
/// ```json
/// { "configured_range": "287k", "startup_command": 33 }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Range the user pinned, or `auto` to trust the device's range tag.
    pub configured_range: GsrRange,
    /// Running-mode command sent to the sensor at startup. When present, the
    /// range it implies takes precedence over `configured_range`.
    pub startup_command: Option<u8>,
}

impl ConverterConfig {
    pub fn from_json_str(text: &str) -> Result<Self, GsrError> {
        Ok(serde_json::from_str(text)?)
    }
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GsrError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
    pub fn effective_range(&self) -> GsrRange {
        match self.startup_command {
            Some(command) => gsr_range_from_command(command),
            None => self.configured_range,
        }
    }
}
