//! Request and response bodies of the notetaker backend.

use serde::{Deserialize, Serialize};

use crate::status::{CalendarEvent, StatusRecord};

/// Response of `GET /recordings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordingList {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub recordings: Vec<StatusRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Body of `POST /fetch-calendar-events`. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize)]
pub struct FetchEventsRequest {
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub calendar_id: String,
}

/// Response of `POST /fetch-calendar-events`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarEventList {
    #[serde(default)]
    pub total_events: usize,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

/// Body of `POST /schedule-meeting`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleMeetingRequest {
    pub title: String,
    pub meeting_link: String,
    /// `YYYY-MM-DD HH:MM AM/PM`
    pub start_time: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleMeetingResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub event_id: Option<String>,
    pub title: Option<String>,
    pub start_time: Option<String>,
    pub meeting_link: Option<String>,
    pub provider: Option<String>,
    pub calendar_link: Option<String>,
    pub notetaker_id: Option<String>,
    pub bot_status: Option<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

/// Body of `POST /auto-deploy-bot`.
#[derive(Debug, Clone, Serialize)]
pub struct AutoDeployBotRequest {
    pub event_id: String,
    pub calendar_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeployBotResponse {
    pub notetaker_id: String,
    pub message: Option<String>,
    pub event_id: Option<String>,
    pub event_title: Option<String>,
    pub meeting_link: Option<String>,
    pub status: Option<String>,
}

/// Response of `DELETE /recordings/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteRecordingResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub deleted_notetaker_id: Option<String>,
}

/// Response of `DELETE /calendar-events/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteEventResponse {
    #[serde(default)]
    pub success: bool,
    pub deleted_event_id: Option<String>,
    pub event_title: Option<String>,
    #[serde(default)]
    pub calendar_deletion: bool,
    #[serde(default)]
    pub recordings_deleted: u64,
    pub message: Option<String>,
    pub warning: Option<String>,
}

/// Response of `GET /auth-status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub authenticated: bool,
    pub message: Option<String>,
    pub grant_id: Option<String>,
    pub email: Option<String>,
    pub provider: Option<String>,
    pub status: Option<String>,
}
