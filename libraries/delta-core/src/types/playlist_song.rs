//! Songs stored inside playlists

use super::ids::{PlaylistId, PlaylistSongId, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Song record belonging to at most one playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSong {
    pub id: PlaylistSongId,
    pub name: String,
    pub artist: String,
    pub album: Option<String>,
    /// Music service id the song was added from, so it can be played back
    pub video_id: Option<VideoId>,
    pub playlist_id: Option<PlaylistId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for adding a song to a playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistSong {
    pub video_id: Option<VideoId>,
    pub name: String,
    pub artist: String,
    pub album: Option<String>,
}
