/// Core error types for Delta Music
use crate::types::{PlaylistId, PlaylistSongId};
use thiserror::Error;

/// Result type alias using `DeltaError`
pub type Result<T> = std::result::Result<T, DeltaError>;

/// Core error type for Delta Music
#[derive(Error, Debug)]
pub enum DeltaError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Song not found in the given playlist
    #[error("Song {song_id} not found in playlist {playlist_id}")]
    SongNotFound {
        playlist_id: PlaylistId,
        song_id: PlaylistSongId,
    },

    /// Mutation rejected by ownership or protection rules
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Remote music service error
    #[error("Music service error: {0}")]
    MusicService(String),

    /// Media element error
    #[error("Media error: {0}")]
    Media(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl DeltaError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a music service error
    pub fn music_service(msg: impl Into<String>) -> Self {
        Self::MusicService(msg.into())
    }

    /// Whether this error means the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::PlaylistNotFound(_) | Self::SongNotFound { .. }
        )
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for DeltaError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
