//! Conferencing provider detection from a meeting link.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Meeting URL is required")]
    MissingLink,
    #[error(
        "Invalid Zoom meeting link. Please use a standard Zoom meeting link \
         (e.g., https://zoom.us/j/123456789?pwd=...) instead of personal room or web client links."
    )]
    InvalidZoomLink,
}

/// Conferencing providers the notetaker vendor accepts, named exactly as the
/// vendor API expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConferencingProvider {
    #[serde(rename = "Google Meet")]
    GoogleMeet,
    #[serde(rename = "Zoom Meeting")]
    Zoom,
    #[serde(rename = "Microsoft Teams")]
    MicrosoftTeams,
    #[serde(rename = "Skype for Business")]
    SkypeForBusiness,
    #[serde(rename = "Skype for Consumer")]
    SkypeForConsumer,
}

impl ConferencingProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoogleMeet => "Google Meet",
            Self::Zoom => "Zoom Meeting",
            Self::MicrosoftTeams => "Microsoft Teams",
            Self::SkypeForBusiness => "Skype for Business",
            Self::SkypeForConsumer => "Skype for Consumer",
        }
    }

    /// Zoom bots are invited directly rather than embedded in the calendar event.
    pub fn requires_direct_invite(&self) -> bool {
        matches!(self, Self::Zoom)
    }
}

impl std::fmt::Display for ConferencingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the provider of a meeting link.
///
/// Unrecognized hosts fall back to Google Meet, as the backend does. Zoom
/// links must be standard `/j/` join links.
pub fn detect_provider(meeting_url: &str) -> Result<ConferencingProvider, ProviderError> {
    let url = meeting_url.trim().to_lowercase();
    if url.is_empty() {
        return Err(ProviderError::MissingLink);
    }

    let provider = if url.contains("meet.google.com") {
        ConferencingProvider::GoogleMeet
    } else if url.contains("zoom.us") {
        if url.contains("/wc/") || !url.contains("/j/") {
            return Err(ProviderError::InvalidZoomLink);
        }
        ConferencingProvider::Zoom
    } else if url.contains("teams.microsoft.com") || url.contains("teams.live.com") {
        ConferencingProvider::MicrosoftTeams
    } else if url.contains("skype.com") {
        if url.contains("business") {
            ConferencingProvider::SkypeForBusiness
        } else {
            ConferencingProvider::SkypeForConsumer
        }
    } else {
        ConferencingProvider::GoogleMeet
    };

    Ok(provider)
}
