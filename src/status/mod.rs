//! Recording status classification.
//!
//! Maps the raw status tokens reported by the backend onto a small closed set
//! of canonical states, a display label, and the UI actions allowed in that
//! state. Everything here is pure and never fails.

pub mod calendar;
pub mod classifier;
pub mod record;

pub use calendar::{event_actions, CalendarEvent};
pub use classifier::{classify, CanonicalState, RecordingState, UiAction};
pub use record::{RawStatus, StatusRecord};
