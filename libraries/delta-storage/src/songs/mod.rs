//! Songs inside playlists
//!
//! Adding or removing songs is only allowed while the owning playlist is
//! `PUBLIC_UNLOCKED`; every other protection mode is rejected as forbidden.

use crate::{
    playlists,
    rows::{self, now_millis, SONG_COLUMNS},
};
use delta_core::{error::Result, types::*, DeltaError};
use sqlx::SqlitePool;

/// Get all songs of a playlist in insertion order
pub async fn get_by_playlist(pool: &SqlitePool, playlist_id: &PlaylistId) -> Result<Vec<PlaylistSong>> {
    let rows = sqlx::query(&format!(
        "SELECT {SONG_COLUMNS} FROM playlist_songs
         WHERE playlist_id = ?
         ORDER BY created_at, rowid"
    ))
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(rows::song).collect()
}

/// Load the playlist and check that its songs may be changed
async fn mutable_playlist(pool: &SqlitePool, playlist_id: &PlaylistId) -> Result<Playlist> {
    let playlist = playlists::get_by_id(pool, playlist_id)
        .await?
        .ok_or_else(|| DeltaError::PlaylistNotFound(playlist_id.clone()))?;

    match playlist.protection {
        ProtectionMode::PublicUnlocked => Ok(playlist),
        ProtectionMode::PublicLocked => Err(DeltaError::forbidden("Playlist is locked")),
        ProtectionMode::Private => Err(DeltaError::forbidden("Playlist is private")),
    }
}

/// Add a song to a playlist
pub async fn add_to_playlist(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    song: CreatePlaylistSong,
) -> Result<PlaylistSong> {
    mutable_playlist(pool, playlist_id).await?;

    let now = now_millis();
    let row = sqlx::query(&format!(
        "INSERT INTO playlist_songs (id, name, artist, album, video_id, playlist_id, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING {SONG_COLUMNS}"
    ))
    .bind(PlaylistSongId::generate())
    .bind(&song.name)
    .bind(&song.artist)
    .bind(&song.album)
    .bind(&song.video_id)
    .bind(playlist_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    playlists::touch(pool, playlist_id).await?;

    rows::song(&row)
}

/// Remove a song from a playlist
///
/// The song must belong to `playlist_id`; songs of other playlists are
/// reported as not found.
pub async fn remove_from_playlist(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    song_id: &PlaylistSongId,
) -> Result<PlaylistSong> {
    mutable_playlist(pool, playlist_id).await?;

    let row = sqlx::query(&format!(
        "DELETE FROM playlist_songs WHERE id = ? AND playlist_id = ? RETURNING {SONG_COLUMNS}"
    ))
    .bind(song_id)
    .bind(playlist_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DeltaError::SongNotFound {
        playlist_id: playlist_id.clone(),
        song_id: song_id.clone(),
    })?;

    playlists::touch(pool, playlist_id).await?;

    rows::song(&row)
}
