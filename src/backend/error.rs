use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Invalid backend URL {url:?}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to reach notetaker backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse {context}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl BackendError {
    /// Build a status error from a non-success response body.
    ///
    /// FastAPI reports `{"detail": "..."}` (or a list of validation errors
    /// under `detail`); other services use `{"message": "..."}`.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: error_message(body).unwrap_or_else(|| default_message(status, body)),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Worth retrying: the request may succeed later without changes.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidUrl { .. } | Self::Decode { .. } => false,
        }
    }
}

fn error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;

    match json.get("detail") {
        Some(Value::String(detail)) => return Some(detail.clone()),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if !messages.is_empty() {
                return Some(messages.join("; "));
            }
        }
        _ => {}
    }

    json.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn default_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown error")
        .to_string()
}
