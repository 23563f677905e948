use serde_json::Value;
use tracing::trace;

use crate::normalizer::segment::{entries_of, format_entries};
use crate::normalizer::{TranscriptPayload, TranscriptStrategy};

/// A string holding a JSON segment array, or the vendor's
/// `{"transcript": [...]}` file envelope.
///
/// A successful parse wins even if no entry carries text; the result is then
/// empty.
pub struct JsonSegmentsStrategy;

impl Default for JsonSegmentsStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSegmentsStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl TranscriptStrategy for JsonSegmentsStrategy {
    fn apply(&self, payload: &TranscriptPayload) -> Option<String> {
        let text = payload.as_text()?;
        let parsed: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(err) => {
                trace!("Transcript text is not JSON: {}", err);
                return None;
            }
        };

        entries_of(&parsed).map(format_entries)
    }

    fn name(&self) -> &'static str {
        "JsonSegmentsStrategy"
    }
}
