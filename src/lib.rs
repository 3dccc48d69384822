//! Shimmer GSR conversions for the BioZen sensor layer.
//!
//! - [`gsr_resistance`]: raw GSR ADC sample to skin resistance (ohms).
//! - [`gsr_range_from_command`]: running-mode command byte to hardware range.
//! - [`BtAddress`] and [`connection_status_label`]: small translations used
//!   by the connection layer.
//!
//! Everything here is pure; no devices are opened.
pub mod config;
pub mod drivers;
pub mod types;

pub use config::ConverterConfig;
pub use drivers::{
    gsr_range_from_command, gsr_resistance, is_unknown_resistance, BtAddress, GsrConverter,
    GsrError, GsrRange, UNKNOWN_RESISTANCE,
};
pub use types::{connection_status_label, ConnectionStatus, GsrSample};
