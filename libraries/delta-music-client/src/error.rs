//! Error types for the music service client.

use delta_core::DeltaError;
use thiserror::Error;

/// Errors that can occur when talking to the music microservice.
#[derive(Error, Debug)]
pub enum MusicClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("Service error ({status}): {message}")]
    ServiceError { status: u16, message: String },

    /// Track unknown to the service
    #[error("Track not found: {0}")]
    NotFound(String),

    /// Invalid service URL
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse service response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Service is offline or unreachable
    #[error("Service unreachable: {0}")]
    ServiceUnreachable(String),
}

impl From<MusicClientError> for DeltaError {
    fn from(err: MusicClientError) -> Self {
        match err {
            MusicClientError::NotFound(id) => DeltaError::not_found("Track", id),
            other => DeltaError::music_service(other.to_string()),
        }
    }
}

/// Result type for music client operations.
pub type Result<T> = std::result::Result<T, MusicClientError>;
