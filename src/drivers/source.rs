use std::collections::VecDeque;
use std::io::BufRead;

use crate::drivers::{GsrError, GsrRange};
use crate::types::GsrSample;

/// Trait representing something that can yield GSR samples on demand.
pub trait SampleSource {
    fn next_sample(&mut self) -> Result<Option<GsrSample>, GsrError>;
}

/// In-memory source useful for tests and deterministic playback.
pub struct ManualSource {
    queue: VecDeque<GsrSample>,
}

impl ManualSource {
    pub fn new(samples: impl IntoIterator<Item = GsrSample>) -> Self {
        Self {
            queue: samples.into_iter().collect(),
        }
    }
}

impl SampleSource for ManualSource {
    fn next_sample(&mut self) -> Result<Option<GsrSample>, GsrError> {
        Ok(self.queue.pop_front())
    }
}

/// Text source, one sample per line: `<adc>` or `<adc> <range>`.
///
/// The range is a config name (`287k`) or firmware id (`1`); when omitted the
/// sample is tagged `auto`. Blank lines and `#` comments are skipped.
pub struct LineSource<R> {
    reader: R,
    line_no: usize,
    line: String,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            line: String::new(),
        }
    }
}

impl<R: BufRead> SampleSource for LineSource<R> {
    fn next_sample(&mut self) -> Result<Option<GsrSample>, GsrError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let text = self.line.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            return parse_sample(text, self.line_no).map(Some);
        }
    }
}

fn parse_sample(text: &str, line: usize) -> Result<GsrSample, GsrError> {
    let invalid = |reason: String| GsrError::InvalidSample { line, reason };
    let mut fields = text.split(|c: char| c == ',' || c.is_whitespace()).filter(|f| !f.is_empty());
    let adc_field = fields.next().ok_or_else(|| invalid("missing ADC value".into()))?;
    let adc = adc_field
        .parse::<i32>()
        .map_err(|e| invalid(format!("bad ADC value '{adc_field}': {e}")))?;
    let reported_range = match fields.next() {
        Some(field) => field
            .parse::<GsrRange>()
            .map_err(|_| invalid(format!("bad range '{field}'")))?,
        None => GsrRange::AutoRange,
    };
    if let Some(extra) = fields.next() {
        return Err(invalid(format!("unexpected field '{extra}'")));
    }
    Ok(GsrSample::new(adc, reported_range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    #[test]
    fn manual_source_drains_in_order() {
        let mut source = ManualSource::new(vec![
            GsrSample::new(1500, GsrRange::Res40K),
            GsrSample::new(2500, GsrRange::Res1M),
        ]);
        assert_eq!(source.next_sample().unwrap().unwrap().adc, 1500);
        assert_eq!(source.next_sample().unwrap().unwrap().adc, 2500);
        assert!(source.next_sample().unwrap().is_none());
    }
    #[test]
    fn line_source_parses_ranges_and_skips_comments() {
        let input = "# adc range\n2000\n\n2500 287k\n3163,3\n";
        let mut source = LineSource::new(Cursor::new(input));
        assert_eq!(
            source.next_sample().unwrap(),
            Some(GsrSample::new(2000, GsrRange::AutoRange))
        );
        assert_eq!(
            source.next_sample().unwrap(),
            Some(GsrSample::new(2500, GsrRange::Res287K))
        );
        assert_eq!(
            source.next_sample().unwrap(),
            Some(GsrSample::new(3163, GsrRange::Res3M3))
        );
        assert_eq!(source.next_sample().unwrap(), None);
    }
    #[test]
    fn line_source_reports_bad_lines() {
        let mut source = LineSource::new(Cursor::new("2000\nabc\n"));
        assert!(source.next_sample().unwrap().is_some());
        match source.next_sample() {
            Err(GsrError::InvalidSample { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected invalid sample, got {other:?}"),
        }
        let mut source = LineSource::new(Cursor::new("2000 10k\n"));
        assert!(source.next_sample().is_err());
        let mut source = LineSource::new(Cursor::new("2000 1 extra\n"));
        assert!(source.next_sample().is_err());
    }
}
