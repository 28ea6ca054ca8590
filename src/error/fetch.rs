//! Remote fetch errors.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a single remote call.
///
/// There is no retry anywhere in the crate; callers get exactly what the
/// transport or the server reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The remote could not be reached (connection refused, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote answered with a non-success status.
    #[error("API error: {status} {status_text}")]
    Response { status: u16, status_text: String },

    /// The remote answered 2xx but the body is not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short error code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "E_FETCH_TRANSPORT",
            FetchError::Response { .. } => "E_FETCH_STATUS",
            FetchError::Decode(_) => "E_FETCH_DECODE",
        }
    }

    /// HTTP status, when the remote replied at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// One-line explanation suitable for a status bar.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport(_) => {
                "Unable to reach the server. Please check your connection.".to_string()
            }
            FetchError::Response { status, .. } => match *status {
                404 => "The requested resource was not found.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The server is experiencing issues. Please try again later.".to_string()
                }
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            FetchError::Decode(_) => "Received an invalid response from the server.".to_string(),
        }
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
