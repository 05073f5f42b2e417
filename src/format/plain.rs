use super::LogFormatter;
use super::json::to_json_string;
use crate::domain::{LogEntry, Payload};

/// Human-oriented output.
///
/// Text payloads are written unchanged; structured payloads fall back to
/// compact JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlainLogFormatter {
    prefix_level: bool,
}

impl PlainLogFormatter {
    pub fn new() -> Self {
        Self {
            prefix_level: false,
        }
    }

    /// Prefixes every line with the entry level, e.g. `INFO started`.
    pub fn with_level() -> Self {
        Self { prefix_level: true }
    }

    fn render_payload(payload: &Payload) -> String {
        match payload {
            Payload::Text(text) => text.clone(),
            other => to_json_string(other, false),
        }
    }
}

impl LogFormatter for PlainLogFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        let body = Self::render_payload(&entry.data);
        if self.prefix_level {
            format!("{} {}", entry.level, body)
        } else {
            body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LogLevel;
    use serde_json::json;

    #[test]
    fn test_text_passes_through() {
        let formatter = PlainLogFormatter::new();
        let entry = LogEntry::new(LogLevel::Info, "server started on :8080");

        assert_eq!(formatter.format(&entry), "server started on :8080");
    }

    #[test]
    fn test_structured_falls_back_to_json() {
        let formatter = PlainLogFormatter::new();
        let entry = LogEntry::new(LogLevel::Info, Payload::from(json!({"port": 8080})));

        assert_eq!(formatter.format(&entry), r#"{"port":8080}"#);
    }

    #[test]
    fn test_with_level_prefix() {
        let formatter = PlainLogFormatter::with_level();
        let entry = LogEntry::new(LogLevel::Error, "disk full");

        assert_eq!(formatter.format(&entry), "ERROR disk full");
    }

    #[test]
    fn test_unserializable() {
        let formatter = PlainLogFormatter::with_level();
        let entry = LogEntry::new(LogLevel::Debug, Payload::Unserializable("bad key".to_string()));

        assert_eq!(formatter.format(&entry), "DEBUG error serializing msg: bad key");
    }
}
