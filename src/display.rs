//! Render decisions for a single recording.
//!
//! Classifies the record, and only when the transcript is ready, normalizes the
//! payload and cuts a preview from it.

use serde::Serialize;

use crate::normalizer::{normalize, preview};
use crate::status::{classify, RecordingState, StatusRecord};

#[derive(Debug, Clone, Serialize)]
pub struct RecordingView {
    pub notetaker_id: String,
    pub state: RecordingState,
    pub scheduled_time: Option<String>,
    pub message: Option<String>,
    pub reason: Option<String>,
    /// Normalized transcript; only set for ready recordings with content.
    pub transcript: Option<String>,
    pub preview: Option<String>,
}

impl RecordingView {
    pub fn from_record(record: &StatusRecord, preview_chars: usize) -> Self {
        let state = classify(record);

        let transcript = if state.shows_transcript() {
            record
                .transcript_text
                .as_ref()
                .map(normalize)
                .filter(|text| !text.is_empty())
        } else {
            None
        };
        // A zero limit disables previews rather than rendering a bare "...".
        let preview = transcript
            .as_deref()
            .filter(|_| preview_chars > 0)
            .map(|text| preview(text, preview_chars));

        Self {
            notetaker_id: record.notetaker_id.clone(),
            state,
            scheduled_time: record.scheduled_time.clone(),
            message: record.message.clone(),
            reason: record.reason.clone(),
            transcript,
            preview,
        }
    }
}
