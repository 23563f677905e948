use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_SPEAKER: &str = "Speaker";
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// One speaker-attributed utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub speaker: String,
    pub text: String,
}

impl TranscriptSegment {
    /// Build a segment, or `None` when there is no text left after trimming.
    pub fn new(speaker: Option<&str>, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let speaker = speaker
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SPEAKER);

        Some(Self {
            speaker: speaker.to_string(),
            text: text.to_string(),
        })
    }

    /// Read a `{"speaker": .., "text": ..}` mapping. Entries without a string
    /// `text` are dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let text = entry.get("text")?.as_str()?;
        let speaker = entry.get("speaker").and_then(Value::as_str);
        Self::new(speaker, text)
    }

    pub fn line(&self) -> String {
        format!("{}: {}", self.speaker, self.text)
    }
}

/// Render segments in input order, one `speaker: text` line each, separated
/// by a blank line.
pub fn join_segments<I>(segments: I) -> String
where
    I: IntoIterator<Item = TranscriptSegment>,
{
    segments
        .into_iter()
        .map(|segment| segment.line())
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Format a structured list of segment-like entries.
pub fn format_entries(entries: &[Value]) -> String {
    join_segments(entries.iter().filter_map(TranscriptSegment::from_value))
}

/// The entry list of a structured transcript: either a bare array or the
/// vendor's `{"transcript": [...]}` envelope.
pub fn entries_of(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Array(items) => Some(items.as_slice()),
        Value::Object(map) => map
            .get("transcript")
            .and_then(Value::as_array)
            .map(Vec::as_slice),
        _ => None,
    }
}
