//! Row decoding shared by the slices

use chrono::{DateTime, Utc};
use delta_core::{
    error::Result,
    types::{Playlist, PlaylistSong, ProtectionMode},
    DeltaError,
};
use sqlx::{sqlite::SqliteRow, Row};

pub(crate) const PLAYLIST_COLUMNS: &str =
    "id, name, description, user_id, protection, created_at, updated_at";

pub(crate) const SONG_COLUMNS: &str =
    "id, name, artist, album, video_id, playlist_id, created_at, updated_at";

/// Timestamps are stored as Unix milliseconds
pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub(crate) fn timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>> {
    let millis: i64 = row.try_get(column)?;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DeltaError::storage(format!("invalid timestamp in {column}: {millis}")))
}

pub(crate) fn playlist(row: &SqliteRow) -> Result<Playlist> {
    let protection: String = row.try_get("protection")?;

    Ok(Playlist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        user_id: row.try_get("user_id")?,
        protection: protection.parse::<ProtectionMode>()?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
        songs: None,
    })
}

pub(crate) fn song(row: &SqliteRow) -> Result<PlaylistSong> {
    Ok(PlaylistSong {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        artist: row.try_get("artist")?,
        album: row.try_get("album")?,
        video_id: row.try_get("video_id")?,
        playlist_id: row.try_get("playlist_id")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}
