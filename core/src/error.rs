//! Error types for the division client.
//!
//! # Design
//! One variant per stage of a round trip, so callers can tell "the server
//! said no" apart from "the server never answered". Payloads are owned
//! strings rather than source errors, which keeps `ApiError: Clone` and lets
//! the C ABI forward messages verbatim.

use thiserror::Error;

/// Errors returned by `DivisionClient`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// Connecting, sending, or receiving headers failed.
    #[error("transport failed: {0}")]
    TransportError(String),

    /// The server answered with something other than 200.
    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be read to the end.
    #[error("reading response body failed: {0}")]
    ResponseReadError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
