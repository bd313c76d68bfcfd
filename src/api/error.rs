//! Error types for the upstream API layer.

use thiserror::Error;

/// Errors that can occur while talking to The Noun Project API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid client configuration (bad credentials, unbuildable HTTP
    /// client). Fatal at startup; never produced per call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Arguments failed validation before dispatch; no request was sent.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A request URL could not be constructed.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// Network-level failure: connection, DNS, or the 30s timeout.
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream API answered with a non-2xx status.
    #[error("{operation} returned HTTP {status}: {body}")]
    Upstream {
        operation: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },
}

impl ApiError {
    /// Create a new "invalid parameters" error.
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    /// Wrap a reqwest error for the named operation.
    pub fn transport(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { operation, source }
    }
}
