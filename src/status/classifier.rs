use serde::Serialize;
use tracing::debug;

use super::record::{RawStatus, StatusRecord};

/// Actions a front end may offer for a recording or calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiAction {
    ViewDetails,
    ViewFullTranscript,
    CopyId,
    Delete,
    /// Calendar events only.
    DeployBot,
}

impl UiAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewDetails => "view_details",
            Self::ViewFullTranscript => "view_full_transcript",
            Self::CopyId => "copy_id",
            Self::Delete => "delete",
            Self::DeployBot => "deploy_bot",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ViewDetails => "View Details",
            Self::ViewFullTranscript => "View Full Transcript",
            Self::CopyId => "Copy ID",
            Self::Delete => "Delete",
            Self::DeployBot => "Deploy Bot",
        }
    }
}

const IN_PROGRESS_ACTIONS: &[UiAction] = &[
    UiAction::ViewDetails,
    UiAction::CopyId,
    UiAction::Delete,
];
const READY_ACTIONS: &[UiAction] = &[
    UiAction::ViewFullTranscript,
    UiAction::CopyId,
    UiAction::Delete,
];
const UNKNOWN_ACTIONS: &[UiAction] = &[UiAction::CopyId, UiAction::Delete];

/// Canonical, UI-meaningful state derived from a raw status token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalState {
    Scheduled,
    Attending,
    Processing,
    Ready,
    Failed,
    Unknown,
}

impl CanonicalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Attending => "attending",
            Self::Processing => "processing",
            Self::Ready => "ready",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }

    /// Ordered set of actions permitted in this state.
    pub fn actions(&self) -> &'static [UiAction] {
        match self {
            Self::Scheduled | Self::Attending | Self::Processing | Self::Failed => {
                IN_PROGRESS_ACTIONS
            }
            Self::Ready => READY_ACTIONS,
            Self::Unknown => UNKNOWN_ACTIONS,
        }
    }

    /// No further status changes are expected from the backend.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }
}

impl From<RawStatus> for CanonicalState {
    fn from(raw: RawStatus) -> Self {
        match raw {
            RawStatus::Scheduled => Self::Scheduled,
            RawStatus::Recording => Self::Attending,
            RawStatus::Processing => Self::Processing,
            RawStatus::Ready => Self::Ready,
            RawStatus::Failed => Self::Failed,
        }
    }
}

/// What to render for a status record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordingState {
    pub state: CanonicalState,
    pub label: String,
    pub actions: &'static [UiAction],
}

impl RecordingState {
    pub fn allows(&self, action: UiAction) -> bool {
        self.actions.contains(&action)
    }

    /// Whether the transcript payload should be normalized and shown.
    pub fn shows_transcript(&self) -> bool {
        self.state == CanonicalState::Ready
    }
}

/// Classify a status record.
///
/// Only `status` decides the canonical state and the action set. A non-blank
/// `display_status` replaces the label and nothing else.
pub fn classify(record: &StatusRecord) -> RecordingState {
    let state = record
        .raw_status()
        .map(CanonicalState::from)
        .unwrap_or(CanonicalState::Unknown);

    let label = match non_blank(record.display_status.as_deref()) {
        Some(display) => display.to_string(),
        None => default_label(state, record),
    };

    debug!(
        "Classified notetaker {} status {:?} as {}",
        record.notetaker_id,
        record.status,
        state.as_str()
    );

    RecordingState {
        state,
        label,
        actions: state.actions(),
    }
}

fn default_label(state: CanonicalState, record: &StatusRecord) -> String {
    match state {
        CanonicalState::Scheduled => "Meeting Scheduled".to_string(),
        CanonicalState::Attending => "Attending".to_string(),
        CanonicalState::Processing => "Processing".to_string(),
        CanonicalState::Ready => "Media Available".to_string(),
        CanonicalState::Failed => {
            let reason = non_blank(record.reason.as_deref()).unwrap_or("Unknown error");
            format!("Failed: {}", reason)
        }
        CanonicalState::Unknown => record.status.clone(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
