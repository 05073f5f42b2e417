use super::sink::LogSink;
use crate::config::{FormatKind, LoggerConfig};
use crate::domain::{LogEntry, LogLevel, LoggerError, Payload};
use crate::filter::{PackageFilter, PackageNameFilter, PermissiveFilter};
use crate::format::{JsonLogFormatter, LogFormatter, PlainLogFormatter};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

/// What happened to a log call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// The formatted entry was written to the sink.
    Written,
    /// A DEBUG entry was dropped because debug output is disabled.
    DebugDisabled,
    /// The package filter rejected the origin.
    Filtered,
}

impl Emission {
    pub fn is_written(&self) -> bool {
        matches!(self, Emission::Written)
    }
}

/// The logger on which all log methods are defined.
///
/// Configuration methods consume the logger and hand it back, so a logger
/// is fully configured before it can be shared. Clones share the sink,
/// filter and formatter; use [`Logger::for_origin`] to give each component
/// its own origin identifier.
#[derive(Clone)]
pub struct Logger {
    sink: LogSink,
    filter: Arc<dyn PackageFilter>,
    formatter: Arc<dyn LogFormatter>,
    output_debug: bool,
    origin: Arc<str>,
}

impl Logger {
    pub fn new<F>(output_debug: bool, formatter: F) -> Self
    where
        F: LogFormatter + 'static,
    {
        Self::with_formatter(output_debug, Arc::new(formatter))
    }

    /// Logger writing whole entries as JSON to stdout.
    pub fn json(output_debug: bool, pretty: bool) -> Self {
        Self::new(output_debug, JsonLogFormatter::new(pretty))
    }

    pub fn from_config(config: &LoggerConfig) -> Result<Self, LoggerError> {
        config.validate()?;

        let formatter: Arc<dyn LogFormatter> = match (config.format, config.show_level) {
            (FormatKind::Json, true) => Arc::new(JsonLogFormatter::new(config.pretty)),
            (FormatKind::Json, false) => Arc::new(JsonLogFormatter::payload_only(config.pretty)),
            (FormatKind::Plain, true) => Arc::new(PlainLogFormatter::with_level()),
            (FormatKind::Plain, false) => Arc::new(PlainLogFormatter::new()),
        };

        let mut logger =
            Self::with_formatter(config.output_debug, formatter).with_origin(config.origin.as_str());

        if let Some(filter) = &config.filter {
            logger = logger.with_filter(PackageNameFilter::with_mode(
                filter.packages.iter().map(String::as_str),
                filter.mode,
            ));
        }

        tracing::debug!(
            output_debug = config.output_debug,
            format = ?config.format,
            filtered = config.filter.is_some(),
            "logger built from config"
        );

        Ok(logger)
    }

    fn with_formatter(output_debug: bool, formatter: Arc<dyn LogFormatter>) -> Self {
        Self {
            sink: LogSink::stdout(),
            filter: Arc::new(PermissiveFilter),
            formatter,
            output_debug,
            origin: Arc::from(""),
        }
    }

    /// Replaces the output sink with `sink`.
    pub fn with_output_sink<W>(mut self, sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.sink = LogSink::new(sink);
        self
    }

    /// Uses an existing sink, e.g. one already shared with other loggers.
    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: PackageFilter + 'static,
    {
        self.filter = Arc::new(filter);
        self
    }

    pub fn with_shared_filter(mut self, filter: Arc<dyn PackageFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the origin reported by the non-macro log methods.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Arc::from(origin.into());
        self
    }

    /// A copy of this logger bound to another origin, sharing everything else.
    pub fn for_origin(&self, origin: impl Into<String>) -> Self {
        self.clone().with_origin(origin)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn output_debug(&self) -> bool {
        self.output_debug
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    pub fn debug<P: Serialize>(&self, payload: P) -> Result<Emission, LoggerError> {
        self.log(LogLevel::Debug, payload)
    }

    pub fn info<P: Serialize>(&self, payload: P) -> Result<Emission, LoggerError> {
        self.log(LogLevel::Info, payload)
    }

    pub fn error<P: Serialize>(&self, payload: P) -> Result<Emission, LoggerError> {
        self.log(LogLevel::Error, payload)
    }

    /// Log a debug event; `payload` only runs if the entry will be written.
    pub fn debug_defer<F, P>(&self, payload: F) -> Result<Emission, LoggerError>
    where
        F: FnOnce() -> P,
        P: Serialize,
    {
        self.log_defer(LogLevel::Debug, payload)
    }

    pub fn info_defer<F, P>(&self, payload: F) -> Result<Emission, LoggerError>
    where
        F: FnOnce() -> P,
        P: Serialize,
    {
        self.log_defer(LogLevel::Info, payload)
    }

    pub fn error_defer<F, P>(&self, payload: F) -> Result<Emission, LoggerError>
    where
        F: FnOnce() -> P,
        P: Serialize,
    {
        self.log_defer(LogLevel::Error, payload)
    }

    pub fn log<P: Serialize>(&self, level: LogLevel, payload: P) -> Result<Emission, LoggerError> {
        self.log_defer(level, move || payload)
    }

    pub fn log_defer<F, P>(&self, level: LogLevel, payload: F) -> Result<Emission, LoggerError>
    where
        F: FnOnce() -> P,
        P: Serialize,
    {
        self.log_from(&self.origin, level, payload)
    }

    /// Log on behalf of `origin` rather than the logger's own origin.
    /// This is what the `debug!`/`info!`/`error!` macros call.
    pub fn log_from<F, P>(
        &self,
        origin: &str,
        level: LogLevel,
        payload: F,
    ) -> Result<Emission, LoggerError>
    where
        F: FnOnce() -> P,
        P: Serialize,
    {
        if let Some(dropped) = self.gate(level, origin) {
            tracing::trace!(origin, %level, reason = ?dropped, "log entry dropped");
            return Ok(dropped);
        }

        let data = Payload::json(&payload());
        if let Payload::Unserializable(cause) = &data {
            tracing::warn!(origin, %level, %cause, "log payload could not be serialized");
        }

        let entry = LogEntry { level, data };
        let mut line = self.formatter.format(&entry);
        line.push('\n');

        self.sink.write_line(&line).map_err(|e| {
            tracing::warn!(origin, %level, error = %e, "failed to write log entry");
            LoggerError::SinkWrite(e)
        })?;

        Ok(Emission::Written)
    }

    /// Whether an entry at `level` from `origin` would be written.
    pub fn is_enabled(&self, level: LogLevel, origin: &str) -> bool {
        self.gate(level, origin).is_none()
    }

    // Debug gate first so a disabled DEBUG call never reaches the filter
    fn gate(&self, level: LogLevel, origin: &str) -> Option<Emission> {
        if level == LogLevel::Debug && !self.output_debug {
            return Some(Emission::DebugDisabled);
        }
        if !self.filter.filter(origin) {
            return Some(Emission::Filtered);
        }
        None
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("output_debug", &self.output_debug)
            .field("origin", &self.origin)
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}
