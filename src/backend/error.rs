use thiserror::Error;

/// Failure of a single backend call.
///
/// `Transport` and `Status` mean the backend could not be reached or refused
/// the HTTP exchange; `Decode` means it answered with something that is not the
/// expected JSON; `Rejected` means it answered properly but reported a
/// business-level failure.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection, timeout or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP status
    #[error("backend responded with status {0}")]
    Status(reqwest::StatusCode),

    /// Response body is not valid JSON of the expected shape
    #[error("malformed backend response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Backend reported a non-success status
    #[error("backend rejected the request: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}

impl BackendError {
    /// True for failures to reach the backend (network, timeout, HTTP status)
    pub fn is_transport(&self) -> bool {
        matches!(self, BackendError::Transport(_) | BackendError::Status(_))
    }

    /// True when the request hit its timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, BackendError::Transport(e) if e.is_timeout())
    }

    /// Short category name for logs
    pub fn category(&self) -> &'static str {
        match self {
            BackendError::Transport(e) if e.is_timeout() => "timeout",
            BackendError::Transport(_) => "transport",
            BackendError::Status(_) => "http_status",
            BackendError::Decode(_) => "decode",
            BackendError::Rejected(_) => "rejected",
        }
    }

    /// Reason reported by the backend for a business-level failure
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            BackendError::Rejected(message) => message.as_deref(),
            _ => None,
        }
    }
}
