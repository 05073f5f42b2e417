//! The logging façade.
//!
//! # Emission
//! ```text
//! debug/info/error(payload)  or  *_defer(|| payload)  or  macros
//!     → debug gate (DEBUG dropped unless output_debug)
//!     → PackageFilter::filter(origin)
//!     → payload produced, LogEntry built
//!     → LogFormatter::format + "\n"
//!     → LogSink (one locked write per entry)
//! ```

pub mod logger;
pub mod macros;
pub mod sink;

pub use logger::{Emission, Logger};
pub use sink::{LogSink, MemorySink};
