//! Command-line front end.
//!
//! Handlers fetch from the backend, run records through the classifier and
//! normalizer, and print the result. Formatting lives in small pure functions
//! so it can be tested without a terminal.

pub mod args;
mod auth;
mod calendar;
mod recordings;
mod schedule;

use anyhow::{bail, Result};

use crate::backend::{HttpBackend, NotetakerBackend};
use crate::config::Config;
use crate::status::{RecordingState, UiAction};

pub use args::{
    CalendarCliArgs, CalendarCommand, Cli, CliCommand, RecordingsCliArgs, RecordingsCommand,
    ScheduleCliArgs,
};
pub use auth::handle_auth_command;
pub use calendar::handle_calendar_command;
pub use recordings::handle_recordings_command;
pub use schedule::handle_schedule_command;

/// Configuration plus the backend every handler talks to.
pub struct CliContext {
    pub config: Config,
    backend: Box<dyn NotetakerBackend>,
}

impl CliContext {
    /// Build an HTTP-backed context. `api_url` overrides `config.backend.base_url`.
    pub fn new(mut config: Config, api_url: Option<&str>) -> Result<Self> {
        if let Some(url) = api_url {
            config.backend.base_url = url.to_string();
        }

        let backend = HttpBackend::new(&config.backend.base_url, config.backend.request_timeout())?;
        Ok(Self::with_backend(config, Box::new(backend)))
    }

    pub fn with_backend(config: Config, backend: Box<dyn NotetakerBackend>) -> Self {
        Self { config, backend }
    }

    pub fn backend(&self) -> &dyn NotetakerBackend {
        self.backend.as_ref()
    }
}

/// Fail unless `action` is offered in the classified state.
pub(crate) fn ensure_allowed(state: &RecordingState, action: UiAction) -> Result<()> {
    if !state.allows(action) {
        bail!(
            "'{}' is not available while the recording is '{}'",
            action.label(),
            state.label
        );
    }
    Ok(())
}

pub(crate) fn action_labels(actions: &[UiAction]) -> String {
    actions
        .iter()
        .map(UiAction::label)
        .collect::<Vec<_>>()
        .join(", ")
}
