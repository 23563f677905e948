use crate::normalizer::{TranscriptPayload, TranscriptStrategy};

/// Text that already reads `Speaker: words`.
///
/// Strings that open like a serialized structure are left to the structured
/// strategies, since `'speaker': 'Ann'` also contains a colon-space.
pub struct PreformattedStrategy;

impl Default for PreformattedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PreformattedStrategy {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn looks_structured(text: &str) -> bool {
    matches!(text.trim_start().chars().next(), Some('[') | Some('{'))
}

impl TranscriptStrategy for PreformattedStrategy {
    fn apply(&self, payload: &TranscriptPayload) -> Option<String> {
        let text = payload.as_text()?;
        if text.contains(": ") && !looks_structured(text) {
            Some(text.trim().to_string())
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "PreformattedStrategy"
    }
}
