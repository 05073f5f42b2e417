use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type for logger construction and emission.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Failed to write log entry to sink: {0}")]
    SinkWrite(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl LoggerError {
    /// Sink failures are transient from the caller's point of view; a bad
    /// configuration will fail the same way every time.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LoggerError::SinkWrite(_) => true,
            LoggerError::Config(_) => false,
        }
    }
}
