//! API client errors.

use thiserror::Error;

/// Errors that can occur when communicating with the inventory backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (unreachable host, aborted fetch, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a status outside the success range.
    #[error("request failed with status {status}")]
    Request {
        /// HTTP status code returned by the backend.
        status: u16,
    },

    /// The response body was missing, not JSON, or did not match the expected model.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// A caller-supplied header could not be sent.
    #[error("invalid request header: {0}")]
    InvalidHeader(String),
}

impl ApiError {
    /// HTTP status of a rejected request, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::InvalidHeader(_) => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}
