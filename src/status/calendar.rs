//! Calendar events and the actions they permit.

use serde::{Deserialize, Serialize};

use super::classifier::UiAction;

const WITH_LINK_ACTIONS: &[UiAction] = &[UiAction::DeployBot, UiAction::Delete];
const WITHOUT_LINK_ACTIONS: &[UiAction] = &[UiAction::Delete];

/// A calendar event as listed by `POST /fetch-calendar-events`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub event_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub conferencing_provider: Option<String>,
}

impl CalendarEvent {
    pub fn meeting_link(&self) -> Option<&str> {
        self.meeting_link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    pub fn actions(&self) -> &'static [UiAction] {
        event_actions(self)
    }
}

/// `DeployBot` needs a meeting link to join; `Delete` is always available.
pub fn event_actions(event: &CalendarEvent) -> &'static [UiAction] {
    if event.meeting_link().is_some() {
        WITH_LINK_ACTIONS
    } else {
        WITHOUT_LINK_ACTIONS
    }
}
