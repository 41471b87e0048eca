/// Playlist procedures
///
/// Queries are `GET /api/playlist.<name>?<input>`, mutations are
/// `POST /api/playlist.<name>` with a camelCase JSON body. Every procedure
/// needs a session and performs a single storage call.
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use delta_core::{
    CreatePlaylist, CreatePlaylistSong, Playlist, PlaylistId, PlaylistSong, PlaylistSongId,
    ProtectionMode, UpdatePlaylist, UserId, VideoId,
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInput {
    pub name: String,
    pub description: Option<String>,
    pub protection: Option<ProtectionMode>,
}

#[derive(Debug, Deserialize)]
pub struct ReadByIdInput {
    pub id: PlaylistId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadByUserIdInput {
    pub user_id: UserId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInput {
    pub id: PlaylistId,
    pub name: String,
    pub description: Option<String>,
    pub protection: Option<ProtectionMode>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteInput {
    pub id: PlaylistId,
}

/// Song as picked from search or the player
#[derive(Debug, Deserialize)]
pub struct SongInput {
    /// Music service id
    pub id: VideoId,
    pub name: String,
    pub artist: String,
    pub album: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSongInput {
    pub playlist_id: PlaylistId,
    pub song: SongInput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSongInput {
    pub playlist_id: PlaylistId,
    pub song_id: PlaylistSongId,
}

fn playlist_name(name: String) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ServerError::BadRequest(
            "Playlist name cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// POST /api/playlist.create
pub async fn create(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    input: std::result::Result<Json<CreateInput>, JsonRejection>,
) -> Result<Json<Playlist>> {
    let Json(input) = input?;

    let playlist = app_state
        .db
        .create_playlist(CreatePlaylist {
            name: playlist_name(input.name)?,
            description: input.description,
            user_id: auth.user_id().clone(),
            protection: input.protection.unwrap_or_default(),
        })
        .await?;

    info!(
        playlist_id = %playlist.id,
        user_id = %auth.user_id(),
        protection = %playlist.protection,
        "Playlist created"
    );
    Ok(Json(playlist))
}

/// GET /api/playlist.readById?id=
///
/// Returns the playlist with its songs.
pub async fn read_by_id(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    input: std::result::Result<Query<ReadByIdInput>, QueryRejection>,
) -> Result<Json<Playlist>> {
    let Query(input) = input?;

    let playlist = app_state
        .db
        .get_playlist_with_songs(&input.id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Playlist not found".to_string()))?;

    Ok(Json(playlist))
}

/// GET /api/playlist.readByUserId?userId=
pub async fn read_by_user_id(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    input: std::result::Result<Query<ReadByUserIdInput>, QueryRejection>,
) -> Result<Json<Vec<Playlist>>> {
    let Query(input) = input?;
    let playlists = app_state.db.get_user_playlists(&input.user_id).await?;
    Ok(Json(playlists))
}

/// POST /api/playlist.update
///
/// Only the owner's playlist matches; an omitted protection resets to
/// `PUBLIC_UNLOCKED`.
pub async fn update(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    input: std::result::Result<Json<UpdateInput>, JsonRejection>,
) -> Result<Json<Playlist>> {
    let Json(input) = input?;

    let update = UpdatePlaylist {
        name: playlist_name(input.name)?,
        description: input.description,
        protection: input.protection.unwrap_or_default(),
    };

    let playlist = app_state
        .db
        .update_playlist(&input.id, auth.user_id(), update)
        .await?
        .ok_or_else(|| ServerError::NotFound("Playlist not found".to_string()))?;

    info!(playlist_id = %playlist.id, user_id = %auth.user_id(), "Playlist updated");
    Ok(Json(playlist))
}

/// POST /api/playlist.delete
///
/// Returns the deleted record; its songs go with it.
pub async fn delete(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    input: std::result::Result<Json<DeleteInput>, JsonRejection>,
) -> Result<Json<Playlist>> {
    let Json(input) = input?;

    let playlist = app_state
        .db
        .delete_playlist(&input.id, auth.user_id())
        .await?
        .ok_or_else(|| ServerError::NotFound("Playlist not found".to_string()))?;

    info!(playlist_id = %playlist.id, user_id = %auth.user_id(), "Playlist deleted");
    Ok(Json(playlist))
}

/// POST /api/playlist.addSong
pub async fn add_song(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    input: std::result::Result<Json<AddSongInput>, JsonRejection>,
) -> Result<Json<PlaylistSong>> {
    let Json(AddSongInput { playlist_id, song }) = input?;

    if song.name.trim().is_empty() {
        return Err(ServerError::BadRequest("Song name cannot be empty".to_string()));
    }

    let added = app_state
        .db
        .add_song(
            &playlist_id,
            CreatePlaylistSong {
                video_id: Some(song.id),
                name: song.name,
                artist: song.artist,
                album: song.album,
            },
        )
        .await?;

    info!(playlist_id = %playlist_id, song_id = %added.id, "Song added");
    Ok(Json(added))
}

/// POST /api/playlist.removeSong
pub async fn remove_song(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    input: std::result::Result<Json<RemoveSongInput>, JsonRejection>,
) -> Result<Json<PlaylistSong>> {
    let Json(input) = input?;

    let removed = app_state
        .db
        .remove_song(&input.playlist_id, &input.song_id)
        .await?;

    info!(playlist_id = %input.playlist_id, song_id = %removed.id, "Song removed");
    Ok(Json(removed))
}
