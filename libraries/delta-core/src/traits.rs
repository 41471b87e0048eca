/// Core traits for Delta Music
use crate::error::Result;
use crate::types::{AudioPayload, Song, TrackWithRecommendations, VideoId};
use async_trait::async_trait;

/// Remote music catalogue and audio source
///
/// Implemented by the HTTP client for the music microservice; the player
/// session and the search panel only see this trait.
#[async_trait]
pub trait MusicService: Send + Sync {
    /// Search the catalogue, returning at most `limit` songs
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Song>>;

    /// Fetch a track's metadata together with its recommendation list
    async fn recommendations(&self, video_id: &VideoId) -> Result<TrackWithRecommendations>;

    /// Fetch playable audio for a track
    async fn download(&self, video_id: &VideoId) -> Result<AudioPayload>;
}
