//! Meeting scheduling helpers.
//!
//! Validates what the user typed (meeting link, start time) before the
//! request reaches the backend, mirroring the backend's own rules.

pub mod provider;
pub mod schedule;

pub use provider::{detect_provider, ConferencingProvider, ProviderError};
pub use schedule::{format_start_time, parse_start_time, plan_meeting, MeetingPlan, ScheduleError};
