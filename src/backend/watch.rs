//! Poll a notetaker until its status settles.

use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{info, warn};

use super::error::BackendError;
use super::NotetakerBackend;
use crate::status::{classify, CanonicalState, RecordingState, StatusRecord};

/// Written by the backend's own poller when it gives up on a notetaker. It is
/// not a canonical state, but the record will not change after it.
const BACKEND_GAVE_UP_STATUS: &str = "timeout";

#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(30),
            timeout: Duration::from_secs(3600),
        }
    }
}

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Notetaker {notetaker_id} did not finish within {} seconds", .timeout.as_secs())]
    TimedOut {
        notetaker_id: String,
        timeout: Duration,
        last: Option<Box<StatusRecord>>,
    },
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Poll `GET /transcripts/{id}` until the classified state is terminal or the
/// backend reports that it stopped tracking the notetaker.
///
/// `on_change` is called with each record whose canonical state or label
/// differs from the previous one. Retryable backend errors are logged and
/// polling continues; other errors end the watch.
pub async fn watch_status<B, F>(
    backend: &B,
    notetaker_id: &str,
    options: &WatchOptions,
    mut on_change: F,
) -> Result<StatusRecord, WatchError>
where
    B: NotetakerBackend + ?Sized,
    F: FnMut(&StatusRecord, &RecordingState),
{
    let started = Instant::now();
    let mut last_seen: Option<(CanonicalState, String)> = None;
    let mut last_record: Option<StatusRecord> = None;

    loop {
        match backend.transcript_status(notetaker_id).await {
            Ok(record) => {
                let state = classify(&record);
                let key = (state.state, state.label.clone());

                if last_seen.as_ref() != Some(&key) {
                    info!(
                        "Notetaker {} status: {} ({})",
                        notetaker_id,
                        state.label,
                        state.state.as_str()
                    );
                    on_change(&record, &state);
                    last_seen = Some(key);
                }

                if is_settled(&record, &state) {
                    return Ok(record);
                }
                last_record = Some(record);
            }
            Err(err) if err.is_retryable() => {
                warn!("Polling notetaker {} failed, will retry: {}", notetaker_id, err);
            }
            Err(err) => return Err(err.into()),
        }

        if started.elapsed() >= options.timeout {
            return Err(WatchError::TimedOut {
                notetaker_id: notetaker_id.to_string(),
                timeout: options.timeout,
                last: last_record.map(Box::new),
            });
        }

        sleep(options.poll_interval).await;
    }
}

fn is_settled(record: &StatusRecord, state: &RecordingState) -> bool {
    state.state.is_terminal() || record.status == BACKEND_GAVE_UP_STATUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::{
        AuthStatus, AutoDeployBotRequest, CalendarEventList, DeleteEventResponse,
        DeleteRecordingResponse, DeployBotResponse, FetchEventsRequest, RecordingList,
        ScheduleMeetingRequest, ScheduleMeetingResponse,
    };
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays scripted responses; the last one repeats forever.
    struct ScriptedBackend {
        responses: Mutex<VecDeque<Result<StatusRecord, u16>>>,
        calls: Mutex<usize>,
    }

    impl ScriptedBackend {
        fn new(responses: Vec<Result<StatusRecord, u16>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl NotetakerBackend for ScriptedBackend {
        async fn transcript_status(&self, _id: &str) -> Result<StatusRecord, BackendError> {
            *self.calls.lock().unwrap() += 1;
            let mut responses = self.responses.lock().unwrap();
            let next = if responses.len() > 1 {
                responses.pop_front().unwrap()
            } else {
                responses.front().cloned().unwrap()
            };
            next.map_err(|status| BackendError::from_response(status, ""))
        }

        async fn list_recordings(&self) -> Result<RecordingList, BackendError> {
            unimplemented!()
        }

        async fn delete_recording(
            &self,
            _id: &str,
        ) -> Result<DeleteRecordingResponse, BackendError> {
            unimplemented!()
        }

        async fn schedule_meeting(
            &self,
            _request: &ScheduleMeetingRequest,
        ) -> Result<ScheduleMeetingResponse, BackendError> {
            unimplemented!()
        }

        async fn fetch_calendar_events(
            &self,
            _request: &FetchEventsRequest,
        ) -> Result<CalendarEventList, BackendError> {
            unimplemented!()
        }

        async fn auto_deploy_bot(
            &self,
            _request: &AutoDeployBotRequest,
        ) -> Result<DeployBotResponse, BackendError> {
            unimplemented!()
        }

        async fn delete_calendar_event(
            &self,
            _event_id: &str,
            _calendar_id: &str,
        ) -> Result<DeleteEventResponse, BackendError> {
            unimplemented!()
        }

        async fn auth_status(&self) -> Result<AuthStatus, BackendError> {
            unimplemented!()
        }
    }

    fn fast() -> WatchOptions {
        WatchOptions {
            poll_interval: Duration::from_millis(1),
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_watch_until_ready() {
        let backend = ScriptedBackend::new(vec![
            Ok(StatusRecord::new("nt_1", "scheduled")),
            Ok(StatusRecord::new("nt_1", "scheduled")),
            Ok(StatusRecord::new("nt_1", "recording")),
            Ok(StatusRecord::new("nt_1", "processing")),
            Ok(StatusRecord::new("nt_1", "ready").with_transcript("Ann: Hi")),
        ]);

        let mut seen = Vec::new();
        let record = watch_status(&backend, "nt_1", &fast(), |_, state| {
            seen.push(state.state)
        })
        .await
        .unwrap();

        assert_eq!(record.status, "ready");
        assert_eq!(backend.calls(), 5);
        assert_eq!(
            seen,
            vec![
                CanonicalState::Scheduled,
                CanonicalState::Attending,
                CanonicalState::Processing,
                CanonicalState::Ready,
            ]
        );
    }

    #[tokio::test]
    async fn test_watch_stops_on_failure() {
        let backend = ScriptedBackend::new(vec![
            Ok(StatusRecord::new("nt_1", "processing")),
            Ok(StatusRecord::new("nt_1", "failed").with_reason("No audio")),
        ]);

        let record = watch_status(&backend, "nt_1", &fast(), |_, _| {}).await.unwrap();
        assert_eq!(record.reason.as_deref(), Some("No audio"));
    }

    #[tokio::test]
    async fn test_watch_retries_server_errors() {
        let backend = ScriptedBackend::new(vec![
            Err(503),
            Ok(StatusRecord::new("nt_1", "processing")),
            Err(500),
            Ok(StatusRecord::new("nt_1", "ready")),
        ]);

        let record = watch_status(&backend, "nt_1", &fast(), |_, _| {}).await.unwrap();
        assert_eq!(record.status, "ready");
        assert_eq!(backend.calls(), 4);
    }

    #[tokio::test]
    async fn test_watch_aborts_on_not_found() {
        let backend = ScriptedBackend::new(vec![Err(404)]);

        let err = watch_status(&backend, "missing", &fast(), |_, _| {})
            .await
            .unwrap_err();
        assert!(matches!(err, WatchError::Backend(ref e) if e.is_not_found()));
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_watch_stops_when_backend_gives_up() {
        let backend = ScriptedBackend::new(vec![
            Ok(StatusRecord::new("nt_1", "processing")),
            Ok(StatusRecord::new("nt_1", "timeout")
                .with_reason("Notetaker did not complete within expected time")),
        ]);
        let options = WatchOptions {
            poll_interval: Duration::from_millis(10),
            timeout: Duration::from_millis(300),
        };

        let record = watch_status(&backend, "nt_1", &options, |_, _| {})
            .await
            .unwrap();

        assert_eq!(record.status, "timeout");
        assert_eq!(
            record.reason.as_deref(),
            Some("Notetaker did not complete within expected time")
        );
        assert_eq!(backend.calls(), 2);
    }

    #[tokio::test]
    async fn test_watch_times_out() {
        let backend = ScriptedBackend::new(vec![Ok(StatusRecord::new("nt_1", "joining"))]);
        let options = WatchOptions {
            poll_interval: Duration::from_millis(5),
            timeout: Duration::from_millis(30),
        };

        let mut changes = 0;
        let err = watch_status(&backend, "nt_1", &options, |_, _| changes += 1)
            .await
            .unwrap_err();

        match err {
            WatchError::TimedOut { last, .. } => {
                assert_eq!(last.unwrap().status, "joining");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(changes, 1);
        assert!(backend.calls() > 1);
    }
}
