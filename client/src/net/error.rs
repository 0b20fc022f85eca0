//! Error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified only by HTTP outcome. Pages never match on status
//! codes themselves; they render `user_message(fallback)`, which prefers the
//! backend's `detail` text and otherwise falls back to a per-action string.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Outcome of a failed REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered 401; the session has been cleared.
    #[error("session expired")]
    Unauthorized { detail: Option<String> },
    /// Non-2xx response other than 401.
    #[error("request failed: {status}")]
    Http { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The action needs a signed-in user and no session is stored.
    #[error("not signed in")]
    NotSignedIn,
    /// REST calls only run in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized { detail: parse_detail(body) };
        }
        Self::Http { status, detail: parse_detail(body) }
    }

    /// Backend-supplied explanation, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Http { detail, .. } | Self::Unauthorized { detail } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the backend detail when present, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Http { detail: Some(detail), .. } | Self::Unauthorized { detail: Some(detail) } => {
                detail.clone()
            }
            Self::NotSignedIn => "Please sign in first.".to_owned(),
            Self::Unauthorized { detail: None } => "Session expired, please sign in again.".to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

/// Extract `detail` from an error body.
///
/// Accepts `{"detail": "text"}` and the validation shape
/// `{"detail": [{"msg": "..."}, ...]}` (messages joined with `; `).
fn parse_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(text) => Some(text.trim().to_owned()).filter(|t| !t.is_empty()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
