use log::debug;

use crate::config::ConverterConfig;
use crate::drivers::error::GsrError;
use crate::drivers::gsr_resistance::{gsr_resistance, is_unknown_resistance};
use crate::drivers::source::SampleSource;
use crate::drivers::GsrRange;
use crate::types::GsrSample;

/// Applies the resistance conversion with one configured range.
#[derive(Clone, Copy, Debug, Default)]
pub struct GsrConverter {
    configured_range: GsrRange,
}

impl GsrConverter {
    pub fn new(configured_range: GsrRange) -> Self {
        Self { configured_range }
    }
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.effective_range())
    }
    pub fn configured_range(&self) -> GsrRange {
        self.configured_range
    }
    pub fn convert(&self, sample: GsrSample) -> i32 {
        let ohms = gsr_resistance(sample.adc, sample.reported_range, self.configured_range);
        if is_unknown_resistance(ohms) {
            debug!(
                "GSR sample adc={} reported={} configured={} has no resistance estimate",
                sample.adc, sample.reported_range, self.configured_range
            );
        }
        ohms
    }
    pub fn convert_all(&self, samples: &[GsrSample]) -> Vec<i32> {
        samples.iter().map(|&s| self.convert(s)).collect()
    }
    /// Pulls one sample from `source` and converts it.
    pub fn pump_once<S: SampleSource>(
        &self,
        source: &mut S,
    ) -> Result<Option<(GsrSample, i32)>, GsrError> {
        let Some(sample) = source.next_sample()? else {
            return Ok(None);
        };
        Ok(Some((sample, self.convert(sample))))
    }
}
