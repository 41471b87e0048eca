//! Playlist queries
//!
//! Updates and deletes are scoped to the owner: a playlist that exists but
//! belongs to someone else is indistinguishable from a missing one.

use crate::{
    rows::{self, now_millis, PLAYLIST_COLUMNS},
    songs,
};
use delta_core::{error::Result, types::*};
use sqlx::SqlitePool;

/// Create new playlist
pub async fn create(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<Playlist> {
    let id = PlaylistId::generate();
    let now = now_millis();

    let row = sqlx::query(&format!(
        "INSERT INTO playlists (id, name, description, user_id, protection, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING {PLAYLIST_COLUMNS}"
    ))
    .bind(&id)
    .bind(&playlist.name)
    .bind(&playlist.description)
    .bind(&playlist.user_id)
    .bind(playlist.protection.as_str())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    rows::playlist(&row)
}

/// Get playlist by ID
pub async fn get_by_id(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(&format!(
        "SELECT {PLAYLIST_COLUMNS} FROM playlists WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(rows::playlist).transpose()
}

/// Get playlist with all of its songs
pub async fn get_with_songs(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let Some(mut playlist) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    playlist.songs = Some(songs::get_by_playlist(pool, id).await?);

    Ok(Some(playlist))
}

/// Get all playlists owned by a user, most recently updated first
pub async fn get_by_user(pool: &SqlitePool, user_id: &UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(&format!(
        "SELECT {PLAYLIST_COLUMNS} FROM playlists
         WHERE user_id = ?
         ORDER BY updated_at DESC, name"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(rows::playlist).collect()
}

/// Update a playlist owned by `user_id`
///
/// Returns `None` when no playlist with this id belongs to the user.
pub async fn update_owned(
    pool: &SqlitePool,
    id: &PlaylistId,
    user_id: &UserId,
    update: UpdatePlaylist,
) -> Result<Option<Playlist>> {
    let row = sqlx::query(&format!(
        "UPDATE playlists
         SET name = ?, description = ?, protection = ?, updated_at = ?
         WHERE id = ? AND user_id = ?
         RETURNING {PLAYLIST_COLUMNS}"
    ))
    .bind(&update.name)
    .bind(&update.description)
    .bind(update.protection.as_str())
    .bind(now_millis())
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(rows::playlist).transpose()
}

/// Delete a playlist owned by `user_id`, cascading to its songs
///
/// Returns the deleted record, or `None` when nothing matched.
pub async fn delete_owned(
    pool: &SqlitePool,
    id: &PlaylistId,
    user_id: &UserId,
) -> Result<Option<Playlist>> {
    let row = sqlx::query(&format!(
        "DELETE FROM playlists WHERE id = ? AND user_id = ? RETURNING {PLAYLIST_COLUMNS}"
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(rows::playlist).transpose()
}

/// Bump `updated_at` after a song mutation
pub(crate) async fn touch(pool: &SqlitePool, id: &PlaylistId) -> Result<()> {
    sqlx::query("UPDATE playlists SET updated_at = ? WHERE id = ?")
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
