use super::LogFormatter;
use crate::domain::LogEntry;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

// Pretty output uses a fixed four-space indent
const PRETTY_INDENT: &[u8] = b"    ";
const INITIAL_BUFFER_CAPACITY: usize = 256;

/// Serializes entries to JSON.
///
/// By default the whole entry is encoded (`{"LogLevel":..,"Data":..}`);
/// [`JsonLogFormatter::payload_only`] encodes just the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonLogFormatter {
    pretty: bool,
    payload_only: bool,
}

impl JsonLogFormatter {
    pub fn new(pretty: bool) -> Self {
        Self {
            pretty,
            payload_only: false,
        }
    }

    pub fn payload_only(pretty: bool) -> Self {
        Self {
            pretty,
            payload_only: true,
        }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl LogFormatter for JsonLogFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        if self.payload_only {
            to_json_string(&entry.data, self.pretty)
        } else {
            to_json_string(entry, self.pretty)
        }
    }
}

/// Encodes `value` as JSON, returning a diagnostic string instead of an
/// error when encoding fails.
pub fn to_json_string<T>(value: &T, pretty: bool) -> String
where
    T: Serialize + ?Sized,
{
    match marshal_json(value, pretty) {
        Ok(json) => json,
        Err(e) => format!("error serializing msg: {e}"),
    }
}

fn marshal_json<T>(value: &T, pretty: bool) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    if !pretty {
        return serde_json::to_string(value);
    }

    let mut buffer = Vec::with_capacity(INITIAL_BUFFER_CAPACITY);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(PRETTY_INDENT));
    value.serialize(&mut serializer)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LogLevel, Payload};
    use serde_json::json;

    #[test]
    fn test_format_string_not_pretty() {
        let formatter = JsonLogFormatter::new(false);
        let line = formatter.format(&LogEntry::new(LogLevel::Debug, "test"));

        assert_eq!(line, r#"{"LogLevel":"DEBUG","Data":"test"}"#);
    }

    #[test]
    fn test_format_pretty_uses_four_space_indent() {
        let formatter = JsonLogFormatter::new(true);
        let line = formatter.format(&LogEntry::new(LogLevel::Info, "test"));

        assert_eq!(line, "{\n    \"LogLevel\": \"INFO\",\n    \"Data\": \"test\"\n}");
    }

    #[test]
    fn test_payload_only() {
        let formatter = JsonLogFormatter::payload_only(false);
        let entry = LogEntry::new(LogLevel::Error, Payload::from(json!({"code": 7})));

        assert_eq!(formatter.format(&entry), r#"{"code":7}"#);
    }

    #[test]
    fn test_unserializable_payload_degrades_to_diagnostic() {
        let formatter = JsonLogFormatter::new(false);
        let entry = LogEntry::new(LogLevel::Error, Payload::Unserializable("boom".to_string()));

        assert_eq!(formatter.format(&entry), "error serializing msg: boom");
    }

    #[test]
    fn test_format_is_deterministic() {
        let formatter = JsonLogFormatter::new(true);
        let entry = LogEntry::new(LogLevel::Info, Payload::from(json!({"b": 1, "a": [true, null]})));

        assert_eq!(formatter.format(&entry), formatter.format(&entry));
    }
}
