//! Error types and handling for the MCP server.
//!
//! Per-call failures stay inside the API layer as `ApiError` and are
//! converted to error-flagged tool results; this enum covers the
//! conditions that prevent the server from starting or keep it from
//! serving at all.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the upstream API layer (e.g., rejected credentials).
    #[error("API error: {0}")]
    Api(#[from] crate::api::ApiError),

    /// Error from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
