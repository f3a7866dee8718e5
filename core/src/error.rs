//! Error types for the Tremendous API client.
//!
//! # Design
//! A closed set of variants, one per failure kind, so callers can branch on
//! the kind instead of matching message text. `UnexpectedStatus` keeps the raw
//! status code and body exactly as the server sent them.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by client operations and `parse_*` methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP round-trip itself failed (DNS, connect, I/O, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The server answered with a status outside the operation's accepted set.
    #[error("unexpected status code {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be decoded into the expected envelope.
    #[error("failed to decode {operation}: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be encoded to JSON.
    #[error("failed to encode {operation}: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The input was rejected before any request was sent.
    #[error("invalid request: {0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status carried by an `UnexpectedStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}
