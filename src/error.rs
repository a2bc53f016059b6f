//! Error types for the WebChnl API clients.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`ApiClient`](crate::ApiClient) and the API wrappers.
///
/// Malformed playlist entries never produce an error; they are skipped by the
/// parser. Only fetching and JSON decoding can fail.
#[derive(Error, Debug)]
pub enum WebchnlError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: StatusCode },

    #[error("invalid JSON from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl WebchnlError {
    /// Endpoint the failing request was sent to, if any.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => Some(endpoint),
            Self::InvalidBaseUrl { .. } | Self::Client(_) => None,
        }
    }

    /// `true` for failures while talking to the server (connection or status).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Status { .. })
    }

    /// `true` when the response body could not be decoded.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, WebchnlError>;
