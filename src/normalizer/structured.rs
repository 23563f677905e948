use crate::normalizer::segment::{entries_of, format_entries};
use crate::normalizer::{TranscriptPayload, TranscriptStrategy};

/// Payloads that arrive already structured: a segment list, or an object
/// wrapping one under `transcript`.
pub struct StructuredStrategy;

impl Default for StructuredStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuredStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl TranscriptStrategy for StructuredStrategy {
    fn apply(&self, payload: &TranscriptPayload) -> Option<String> {
        match payload {
            TranscriptPayload::Sequence(entries) => Some(format_entries(entries)),
            TranscriptPayload::Other(value) => entries_of(value).map(format_entries),
            TranscriptPayload::Text(_) => None,
        }
    }

    fn name(&self) -> &'static str {
        "StructuredStrategy"
    }
}
