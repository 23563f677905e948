//! Client side of the notetaker backend's REST contract.
//!
//! Provides:
//! - Typed request/response bodies for every endpoint
//! - The [`NotetakerBackend`] trait and its HTTP implementation
//! - A status watcher that polls until a notetaker settles

pub mod error;
pub mod http;
pub mod types;
pub mod watch;

use async_trait::async_trait;

use crate::status::StatusRecord;

pub use error::BackendError;
pub use http::HttpBackend;
pub use types::{
    AuthStatus, AutoDeployBotRequest, CalendarEventList, DateRange, DeleteEventResponse,
    DeleteRecordingResponse, DeployBotResponse, FetchEventsRequest, RecordingList,
    ScheduleMeetingRequest, ScheduleMeetingResponse,
};
pub use watch::{watch_status, WatchError, WatchOptions};

/// Operations offered by the notetaker backend.
#[async_trait]
pub trait NotetakerBackend: Send + Sync {
    /// `GET /transcripts/{id}`
    async fn transcript_status(&self, notetaker_id: &str) -> Result<StatusRecord, BackendError>;

    /// `GET /recordings`
    async fn list_recordings(&self) -> Result<RecordingList, BackendError>;

    /// `DELETE /recordings/{id}`
    async fn delete_recording(
        &self,
        notetaker_id: &str,
    ) -> Result<DeleteRecordingResponse, BackendError>;

    /// `POST /schedule-meeting`
    async fn schedule_meeting(
        &self,
        request: &ScheduleMeetingRequest,
    ) -> Result<ScheduleMeetingResponse, BackendError>;

    /// `POST /fetch-calendar-events`
    async fn fetch_calendar_events(
        &self,
        request: &FetchEventsRequest,
    ) -> Result<CalendarEventList, BackendError>;

    /// `POST /auto-deploy-bot`
    async fn auto_deploy_bot(
        &self,
        request: &AutoDeployBotRequest,
    ) -> Result<DeployBotResponse, BackendError>;

    /// `DELETE /calendar-events/{id}`
    async fn delete_calendar_event(
        &self,
        event_id: &str,
        calendar_id: &str,
    ) -> Result<DeleteEventResponse, BackendError>;

    /// `GET /auth-status`
    async fn auth_status(&self) -> Result<AuthStatus, BackendError>;
}
