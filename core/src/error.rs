//! Error types for the ADE client.
//!
//! # Design
//! The library does not interpret remote failures. A rejection reported by
//! ADE arrives as `Fault` with the remote code exactly as sent; failures of
//! the session collaborator arrive as `Transport` with the original error
//! kept as the source. Only (de)serialization of models is local.

use thiserror::Error;

/// Errors returned by the ADE API wrappers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// ADE rejected the call (unknown id, expired session, bad parameter).
    #[error("ADE fault {code}: {message}")]
    Fault { code: String, message: String },

    /// The endpoint answered with a non-200 status and no fault body.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The session collaborator failed before producing a response.
    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The decoded response did not match the expected model.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// A model could not be turned into request parameters.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// Wrap a collaborator error without altering it.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        ApiError::Transport(err.into())
    }

    /// The raw ADE fault code, if this is a remote rejection.
    pub fn fault_code(&self) -> Option<&str> {
        match self {
            ApiError::Fault { code, .. } => Some(code),
            _ => None,
        }
    }
}
