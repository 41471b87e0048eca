//! Error types for playback management

use delta_core::DeltaError;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// The media element rejected a source or command
    #[error("Media error: {0}")]
    Media(String),

    /// Fetching metadata or audio from the music service failed
    #[error("Music service error: {0}")]
    MusicService(#[from] DeltaError),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
