//! HTTP implementation of [`NotetakerBackend`].

use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use super::error::BackendError;
use super::types::{
    AuthStatus, AutoDeployBotRequest, CalendarEventList, DeleteEventResponse,
    DeleteRecordingResponse, DeployBotResponse, FetchEventsRequest, RecordingList,
    ScheduleMeetingRequest, ScheduleMeetingResponse,
};
use super::NotetakerBackend;
use crate::status::StatusRecord;

/// Client for the notetaker backend's REST API.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    /// Create a new client for the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Backend root, e.g. `http://127.0.0.1:8000`; may carry a path prefix
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let invalid = |message: String| BackendError::InvalidUrl {
            url: base_url.to_string(),
            message,
        };

        let parsed = Url::parse(base_url.trim().trim_end_matches('/'))
            .map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        info!("Initialized notetaker backend client for {}", parsed);

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Read a response body, turning non-success statuses into [`BackendError::Status`].
async fn read_json<T: DeserializeOwned>(
    response: Response,
    context: &'static str,
) -> Result<T, BackendError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(BackendError::from_response(status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|source| BackendError::Decode { context, source })
}

#[async_trait]
impl NotetakerBackend for HttpBackend {
    async fn transcript_status(&self, notetaker_id: &str) -> Result<StatusRecord, BackendError> {
        let url = self.endpoint(&["transcripts", notetaker_id]);
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        read_json(response, "transcript status").await
    }

    async fn list_recordings(&self) -> Result<RecordingList, BackendError> {
        let url = self.endpoint(&["recordings"]);
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        read_json(response, "recording list").await
    }

    async fn delete_recording(
        &self,
        notetaker_id: &str,
    ) -> Result<DeleteRecordingResponse, BackendError> {
        let url = self.endpoint(&["recordings", notetaker_id]);
        debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        read_json(response, "recording deletion response").await
    }

    async fn schedule_meeting(
        &self,
        request: &ScheduleMeetingRequest,
    ) -> Result<ScheduleMeetingResponse, BackendError> {
        let url = self.endpoint(&["schedule-meeting"]);
        debug!("POST {}", url);
        let response = self.client.post(url).json(request).send().await?;
        read_json(response, "schedule response").await
    }

    async fn fetch_calendar_events(
        &self,
        request: &FetchEventsRequest,
    ) -> Result<CalendarEventList, BackendError> {
        let url = self.endpoint(&["fetch-calendar-events"]);
        debug!("POST {}", url);
        let response = self.client.post(url).json(request).send().await?;
        read_json(response, "calendar events").await
    }

    async fn auto_deploy_bot(
        &self,
        request: &AutoDeployBotRequest,
    ) -> Result<DeployBotResponse, BackendError> {
        let url = self.endpoint(&["auto-deploy-bot"]);
        debug!("POST {}", url);
        let response = self.client.post(url).json(request).send().await?;
        read_json(response, "bot deployment response").await
    }

    async fn delete_calendar_event(
        &self,
        event_id: &str,
        calendar_id: &str,
    ) -> Result<DeleteEventResponse, BackendError> {
        let mut url = self.endpoint(&["calendar-events", event_id]);
        url.query_pairs_mut().append_pair("calendar_id", calendar_id);
        debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        read_json(response, "event deletion response").await
    }

    async fn auth_status(&self) -> Result<AuthStatus, BackendError> {
        let url = self.endpoint(&["auth-status"]);
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        read_json(response, "auth status").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = backend("http://127.0.0.1:8000/");
        assert_eq!(
            client.endpoint(&["transcripts", "nt_1"]).as_str(),
            "http://127.0.0.1:8000/transcripts/nt_1"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let client = backend("https://notes.example.com/api/");
        assert_eq!(
            client.endpoint(&["recordings"]).as_str(),
            "https://notes.example.com/api/recordings"
        );
    }

    #[test]
    fn test_endpoint_encodes_ids() {
        let client = backend("http://localhost:8000");
        assert_eq!(
            client.endpoint(&["recordings", "a/b c"]).as_str(),
            "http://localhost:8000/recordings/a%2Fb%20c"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            HttpBackend::new("not a url", Duration::from_secs(1)),
            Err(BackendError::InvalidUrl { .. })
        ));
        assert!(matches!(
            HttpBackend::new("mailto:someone@example.com", Duration::from_secs(1)),
            Err(BackendError::InvalidUrl { .. })
        ));
    }
}
