//! Local validation of a meeting before it is sent to `POST /schedule-meeting`.

use chrono::NaiveDateTime;
use thiserror::Error;

use super::provider::{detect_provider, ConferencingProvider, ProviderError};
use crate::backend::ScheduleMeetingRequest;

/// Start times are wall-clock times in the backend's scheduling timezone.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Meeting title is required")]
    EmptyTitle,
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(
        "Invalid date/time {input:?}. Use format: 'YYYY-MM-DD HH:MM AM/PM' (e.g., '2025-10-07 10:46 AM')"
    )]
    InvalidStartTime {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// A validated meeting, ready to be posted.
#[derive(Debug, Clone)]
pub struct MeetingPlan {
    pub request: ScheduleMeetingRequest,
    pub provider: ConferencingProvider,
}

pub fn parse_start_time(input: &str) -> Result<NaiveDateTime, ScheduleError> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, START_TIME_FORMAT).map_err(|source| {
        ScheduleError::InvalidStartTime {
            input: trimmed.to_string(),
            source,
        }
    })
}

pub fn format_start_time(start: &NaiveDateTime) -> String {
    start.format(START_TIME_FORMAT).to_string()
}

/// Validate title, meeting link and start time, and build the request in the
/// backend's canonical start-time format.
pub fn plan_meeting(
    title: &str,
    meeting_link: &str,
    start_time: &str,
) -> Result<MeetingPlan, ScheduleError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ScheduleError::EmptyTitle);
    }

    let provider = detect_provider(meeting_link)?;
    let start = parse_start_time(start_time)?;

    Ok(MeetingPlan {
        request: ScheduleMeetingRequest {
            title: title.to_string(),
            meeting_link: meeting_link.trim().to_string(),
            start_time: format_start_time(&start),
        },
        provider,
    })
}
