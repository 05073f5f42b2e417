#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
#![allow(
    clippy::missing_errors_doc,      // Every fallible call returns LoggerError or ConfigError
    clippy::module_name_repetitions, // e.g. LoggerError in logger-facing modules
    clippy::module_inception,        // logger::logger holds the Logger type
    clippy::must_use_candidate,
    clippy::doc_markdown
)]

//! Loglight: leveled, filterable, pluggable-format logging.

pub mod config;
pub mod domain;
pub mod filter;
pub mod format;
pub mod logger;

// Re-export main types for easy access
pub use config::{ConfigError, FilterConfig, FormatKind, LoggerConfig};
pub use domain::{LogEntry, LogLevel, LoggerError, Payload};
pub use filter::{FilterMode, PackageFilter, PackageNameFilter, PermissiveFilter};
pub use format::{JsonLogFormatter, LogFormatter, PlainLogFormatter, to_json_string};
pub use logger::{Emission, LogSink, Logger, MemorySink};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
