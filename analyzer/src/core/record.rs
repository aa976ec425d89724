//! Untyped, recursively nested log values.
//!
//! Agent logs have no fixed schema, so the analyzer works on a closed sum
//! type instead of inspecting `serde_json::Value` ad hoc. Map entries keep
//! document order so traversal results are deterministic.

use serde_json::{Number, Value};

/// A leaf value in a log tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// A node in an agent log: a mapping, a sequence, or a scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum LogRecord {
    /// Key/value pairs in document order.
    Map(Vec<(String, LogRecord)>),
    Sequence(Vec<LogRecord>),
    Scalar(Scalar),
}

impl LogRecord {
    /// Look up `key` in a mapping. Returns `None` for sequences and scalars.
    pub fn get(&self, key: &str) -> Option<&LogRecord> {
        match self {
            LogRecord::Map(entries) => entries
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            LogRecord::Sequence(_) | LogRecord::Scalar(_) => None,
        }
    }

    /// Borrow the text of a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LogRecord::Scalar(Scalar::String(text)) => Some(text),
            _ => None,
        }
    }

    /// True for mappings and sequences (nodes that can hold children).
    pub fn is_container(&self) -> bool {
        matches!(self, LogRecord::Map(_) | LogRecord::Sequence(_))
    }

    /// Compact JSON rendering, used when a non-string value must be shown as text.
    pub fn to_json_string(&self) -> String {
        Value::from(self.clone()).to_string()
    }
}

impl From<Value> for LogRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => LogRecord::Map(
                map.into_iter()
                    .map(|(key, value)| (key, LogRecord::from(value)))
                    .collect(),
            ),
            Value::Array(items) => {
                LogRecord::Sequence(items.into_iter().map(LogRecord::from).collect())
            }
            Value::String(text) => LogRecord::Scalar(Scalar::String(text)),
            Value::Number(number) => LogRecord::Scalar(Scalar::Number(number)),
            Value::Bool(flag) => LogRecord::Scalar(Scalar::Bool(flag)),
            Value::Null => LogRecord::Scalar(Scalar::Null),
        }
    }
}

impl From<LogRecord> for Value {
    fn from(record: LogRecord) -> Self {
        match record {
            LogRecord::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
            LogRecord::Sequence(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            LogRecord::Scalar(Scalar::String(text)) => Value::String(text),
            LogRecord::Scalar(Scalar::Number(number)) => Value::Number(number),
            LogRecord::Scalar(Scalar::Bool(flag)) => Value::Bool(flag),
            LogRecord::Scalar(Scalar::Null) => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn map_keeps_document_order() {
        let record = LogRecord::from(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        let LogRecord::Map(entries) = record else {
            panic!("expected map");
        };
        let keys: Vec<&str> = entries.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn get_only_applies_to_maps() {
        let record = LogRecord::from(json!({"value": "hello"}));
        assert_eq!(record.get("value").and_then(LogRecord::as_str), Some("hello"));
        assert!(record.get("missing").is_none());

        let seq = LogRecord::from(json!(["value"]));
        assert!(seq.get("value").is_none());
    }

    #[test]
    fn as_str_rejects_non_strings() {
        assert_eq!(LogRecord::from(json!(42)).as_str(), None);
        assert_eq!(LogRecord::from(json!(null)).as_str(), None);
        assert_eq!(LogRecord::from(json!("ok")).as_str(), Some("ok"));
    }

    #[test]
    fn converts_back_to_json() {
        let original = json!({"a": [1, true, null, "x"], "b": {"c": 2.5}});
        let record = LogRecord::from(original.clone());
        assert_eq!(Value::from(record), original);
    }
}
