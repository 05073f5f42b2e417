//! Domain layer for loglight.
//!
//! Contains the canonical types shared across all modules:
//! - `LogEntry`: One leveled log record handed to a formatter
//! - `LogLevel`: Entry severity (Debug/Info/Error)
//! - `Payload`: The serializable data carried by an entry
//! - `LoggerError`: Top-level error type

pub mod error;
pub mod log_entry;
pub mod log_level;
mod value;

pub use error::LoggerError;
pub use log_entry::{LogEntry, Payload};
pub use log_level::LogLevel;
