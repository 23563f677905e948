use serde_json::Value;

/// A transcript as it arrived from the backend, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptPayload {
    /// Pre-joined text, a JSON document, or a stringified structure.
    Text(String),
    /// A structured list of segment-like entries.
    Sequence(Vec<Value>),
    /// Anything else (numbers, booleans, objects, null).
    Other(Value),
}

impl TranscriptPayload {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Value> for TranscriptPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::Sequence(items),
            other => Self::Other(other),
        }
    }
}

impl From<&Value> for TranscriptPayload {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<String> for TranscriptPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for TranscriptPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
