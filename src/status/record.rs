//! Status records as reported by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw status tokens the backend is known to report for a notetaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawStatus {
    Scheduled,
    Recording,
    Processing,
    Ready,
    Failed,
}

impl RawStatus {
    pub const ALL: [RawStatus; 5] = [
        Self::Scheduled,
        Self::Recording,
        Self::Processing,
        Self::Ready,
        Self::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Recording => "recording",
            Self::Processing => "processing",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }

    /// Exact, case-sensitive match against the known tokens.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|raw| raw.as_str() == token)
    }
}

/// Lifecycle status of one notetaker session.
///
/// Returned by `GET /transcripts/{id}` and, as a list, by `GET /recordings`.
/// The backend emits snake_case keys; camelCase aliases are accepted so records
/// relayed through a JavaScript front end still parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    #[serde(alias = "notetakerId")]
    pub notetaker_id: String,
    /// Raw status token. Untrusted; anything outside [`RawStatus`] is unrecognized.
    #[serde(default)]
    pub status: String,
    #[serde(
        default,
        alias = "displayStatus",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_status: Option<String>,
    #[serde(
        default,
        alias = "scheduledTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_time: Option<String>,
    /// Failure explanation, only meaningful when `status` is `failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Transcript payload in whatever shape the backend stored it. Only
    /// meaningful when `status` is `ready`.
    #[serde(
        default,
        alias = "transcriptText",
        skip_serializing_if = "Option::is_none"
    )]
    pub transcript_text: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusRecord {
    pub fn new(notetaker_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            notetaker_id: notetaker_id.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    pub fn with_display_status(mut self, display_status: impl Into<String>) -> Self {
        self.display_status = Some(display_status.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_transcript(mut self, payload: impl Into<Value>) -> Self {
        self.transcript_text = Some(payload.into());
        self
    }

    pub fn raw_status(&self) -> Option<RawStatus> {
        RawStatus::parse(&self.status)
    }
}
