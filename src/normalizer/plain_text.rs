use serde_json::Value;

use crate::normalizer::{TranscriptPayload, TranscriptStrategy};

/// Last resort: assume the content is already human-readable.
pub struct PlainTextStrategy;

impl Default for PlainTextStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainTextStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl TranscriptStrategy for PlainTextStrategy {
    fn apply(&self, payload: &TranscriptPayload) -> Option<String> {
        Some(coerce_to_text(payload))
    }

    fn name(&self) -> &'static str {
        "PlainTextStrategy"
    }
}

/// Trimmed string form of any payload. `null` becomes the empty string.
pub fn coerce_to_text(payload: &TranscriptPayload) -> String {
    match payload {
        TranscriptPayload::Text(text) => text.trim().to_string(),
        TranscriptPayload::Other(Value::Null) => String::new(),
        TranscriptPayload::Other(Value::String(text)) => text.trim().to_string(),
        TranscriptPayload::Other(value) => value.to_string().trim().to_string(),
        TranscriptPayload::Sequence(items) => Value::Array(items.clone()).to_string(),
    }
}
