use std::sync::Arc;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between issuing the search request and
/// having decoded images ready for display.
///
/// Inner errors are behind `Arc` so the value can be cloned into iced
/// messages.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, truncated body...
    #[error("network request failed: {0}")]
    Transport(Arc<reqwest::Error>),

    /// The server rejected the token
    #[error("authorization rejected ({status})")]
    Unauthorized { status: StatusCode },

    /// The request went out without a token and the server refused it
    #[error("no API token configured ({status})")]
    MissingToken { status: StatusCode },

    /// Any other non-2xx response
    #[error("unexpected HTTP status {status}")]
    Status { status: StatusCode },

    /// The body was not the expected JSON shape
    #[error("malformed search response: {0}")]
    Decode(Arc<serde_json::Error>),

    /// Downloaded bytes were not a decodable image
    #[error("image decoding failed: {0}")]
    Image(Arc<image::ImageError>),

    /// A background task panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(String),
}

impl FetchError {
    /// Map a non-success status to the matching error kind
    pub fn from_status(status: StatusCode, has_token: bool) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN if !has_token => {
                FetchError::MissingToken { status }
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FetchError::Unauthorized { status },
            status => FetchError::Status { status },
        }
    }

    /// Short label for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Unauthorized { .. } => "unauthorized",
            FetchError::MissingToken { .. } => "missing-token",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
            FetchError::Image(_) => "image",
            FetchError::Task(_) => "task",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(Arc::new(err))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(Arc::new(err))
    }
}

impl From<image::ImageError> for FetchError {
    fn from(err: image::ImageError) -> Self {
        FetchError::Image(Arc::new(err))
    }
}

impl From<tokio::task::JoinError> for FetchError {
    fn from(err: tokio::task::JoinError) -> Self {
        FetchError::Task(err.to_string())
    }
}
