use thiserror::Error;
#[derive(Debug, Error)]
pub enum GsrError {
    #[error("unknown GSR range id {0}; expected 0..=4")]
    UnknownRange(u8),
    #[error("invalid Bluetooth address '{0}'; expected xx:xx:xx:xx:xx:xx")]
    InvalidAddress(String),
    #[error("invalid sample on line {line}: {reason}")]
    InvalidSample { line: usize, reason: String },
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid converter config: {0}")]
    Config(String),
}
impl From<serde_json::Error> for GsrError {
    fn from(value: serde_json::Error) -> Self {
        GsrError::Config(value.to_string())
    }
}
