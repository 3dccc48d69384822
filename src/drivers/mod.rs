// src/drivers/mod.rs
pub mod bt_address;
pub mod error;
pub mod gsr_range;
pub mod gsr_resistance;
pub mod pipeline;
pub mod source;
// re-export the conversion surface
pub use bt_address::BtAddress;
pub use error::GsrError;
pub use gsr_range::{
    gsr_range_from_command, lookup_command, sampling_rate_from_command, GsrRange, RunningCommand,
    COMMAND_TABLE,
};
pub use gsr_resistance::{gsr_resistance, is_unknown_resistance, CurveFit, UNKNOWN_RESISTANCE};
pub use pipeline::GsrConverter;
pub use source::{LineSource, ManualSource, SampleSource};
