//! Entry formatting.
//!
//! A formatter turns a `LogEntry` into the single line written to the sink
//! (the logger appends the newline). Formatters must be deterministic and
//! must never fail: encoding problems are rendered into the output string.
//!
//! Any `Fn(&LogEntry) -> String + Send + Sync` closure is a formatter, so
//! host applications can plug in their own layout without touching the
//! logger.

pub mod json;
pub mod plain;

use crate::domain::LogEntry;

pub use json::{JsonLogFormatter, to_json_string};
pub use plain::PlainLogFormatter;

pub trait LogFormatter: Send + Sync {
    fn format(&self, entry: &LogEntry) -> String;
}

impl<F> LogFormatter for F
where
    F: Fn(&LogEntry) -> String + Send + Sync,
{
    fn format(&self, entry: &LogEntry) -> String {
        self(entry)
    }
}
