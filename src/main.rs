// src/main.rs
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use biozen_gsr::drivers::LineSource;
use biozen_gsr::{ConverterConfig, GsrConverter, UNKNOWN_RESISTANCE};
use log::info;

// 入口函数
// usage: gsr-convert [CONFIG.json] < samples.txt
fn main() -> Result<()> {
    env_logger::init();
    let config = match std::env::args().nth(1) {
        Some(path) => ConverterConfig::load(&path)
            .with_context(|| format!("failed to load converter config from {path}"))?,
        None => ConverterConfig::default(),
    };
    let converter = GsrConverter::from_config(&config);
    info!("converting GSR samples with range {}", converter.configured_range());

    let stdin = io::stdin();
    let mut source = LineSource::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut converted = 0usize;
    let mut unknown = 0usize;
    while let Some((sample, ohms)) = converter
        .pump_once(&mut source)
        .context("failed to read GSR sample")?
    {
        converted += 1;
        if ohms == UNKNOWN_RESISTANCE {
            unknown += 1;
            writeln!(out, "{},{},unknown", sample.adc, sample.reported_range)?;
        } else {
            writeln!(out, "{},{},{}", sample.adc, sample.reported_range, ohms)?;
        }
    }
    out.flush()?;
    info!("{converted} samples converted, {unknown} without estimate");
    Ok(())
}
