use super::log_level::LogLevel;
use super::value::to_value_skipping;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// The data carried by a log entry.
///
/// Any `Serialize` value converts into a payload through [`Payload::json`].
/// Plain strings stay textual so formatters can print them unchanged;
/// everything else is held as a JSON value with fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Structured(Value),
    /// Conversion failed. Serializing this variant reproduces the failure so
    /// formatters report it through their normal error path.
    Unserializable(String),
}

impl Payload {
    /// Fields that fail to serialize are omitted; only a failure of the
    /// value as a whole yields `Unserializable`.
    pub fn json<T>(value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        match to_value_skipping(value) {
            Ok(Value::String(text)) => Payload::Text(text),
            Ok(value) => Payload::Structured(value),
            Err(e) => Payload::Unserializable(e.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Payload::Structured(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_serializable(&self) -> bool {
        !matches!(self, Payload::Unserializable(_))
    }
}

impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Payload::Text(text) => serializer.serialize_str(text),
            Payload::Structured(value) => value.serialize(serializer),
            Payload::Unserializable(cause) => Err(S::Error::custom(cause)),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Payload::Text(text),
            value => Payload::Structured(value),
        }
    }
}

/// One leveled log record.
///
/// Created fresh for every accepted log call and dropped once formatted.
/// Serializes as `{"LogLevel": ..., "Data": ...}` with the level first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    #[serde(rename = "LogLevel")]
    pub level: LogLevel,
    #[serde(rename = "Data")]
    pub data: Payload,
}

impl LogEntry {
    pub fn new(level: LogLevel, data: impl Into<Payload>) -> Self {
        Self {
            level,
            data: data.into(),
        }
    }
}
