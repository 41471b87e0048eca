//! Delta Music Core
//!
//! Platform-agnostic domain types, the music service seam, and error handling
//! shared by the storage layer, the playback state machine, the music service
//! client and the server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Playlist`, `PlaylistSong`, `User`, `AudioPayload`
//! - **Core Traits**: `MusicService` (search, recommendations, download)
//! - **Error Handling**: Unified `DeltaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use delta_core::types::{ProtectionMode, Song};
//!
//! let song: Song = serde_json::from_str(r#"{
//!     "id": "dQw4w9WgXcQ",
//!     "title": "Never Gonna Give You Up",
//!     "artists": ["Rick Astley"],
//!     "thumbnails": { "large": "https://img/large.jpg", "mini": "https://img/mini.jpg" },
//!     "duration": "3:33"
//! }"#).unwrap();
//!
//! assert_eq!(song.duration_secs(), Some(213));
//! assert!(ProtectionMode::default().allows_song_mutation());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{DeltaError, Result};
pub use traits::MusicService;

pub use types::{
    format_duration, parse_duration, AudioPayload, CreatePlaylist, CreatePlaylistSong, Playlist,
    PlaylistId, PlaylistSong, PlaylistSongId, ProtectionMode, Song, Thumbnails,
    TrackWithRecommendations, UpdatePlaylist, User, UserId, VideoId,
};
