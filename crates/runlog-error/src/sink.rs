#[derive(Debug, Clone, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write log rows: {0}")]
    Write(String),

    #[error("Failed to serialize log row {sequence}: {message}")]
    Serialize { sequence: usize, message: String },
}

impl From<std::io::Error> for SinkError {
    fn from(e: std::io::Error) -> Self {
        SinkError::Write(e.to_string())
    }
}
