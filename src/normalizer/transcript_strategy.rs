use crate::normalizer::TranscriptPayload;

/// One way of reading a transcript payload.
pub trait TranscriptStrategy: Send + Sync {
    /// Produce display text, or `None` to let the next strategy try.
    /// Must not panic on malformed input.
    fn apply(&self, payload: &TranscriptPayload) -> Option<String>;

    /// Get the name of this strategy for logging
    fn name(&self) -> &'static str;
}
