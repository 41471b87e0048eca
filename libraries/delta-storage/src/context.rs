use crate::{create_pool, playlists, run_migrations, songs, users, StorageError};
use delta_core::{error::Result, types::*};
use sqlx::SqlitePool;

/// `SQLite`-backed storage handle
///
/// Cheap to share behind an `Arc`; every method is a thin wrapper over the
/// slice functions in [`users`], [`playlists`] and [`songs`].
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to `database_url` and apply pending migrations
    pub async fn open(database_url: &str) -> std::result::Result<Self, StorageError> {
        let pool = create_pool(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (migrations are the caller's responsibility)
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // Users
    pub async fn create_user(&self, name: &str) -> Result<User> {
        users::create(&self.pool, name).await
    }

    pub async fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    pub async fn find_user_by_name(&self, name: &str) -> Result<Option<User>> {
        users::find_by_name(&self.pool, name).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    pub async fn get_password_hash(&self, user_id: &UserId) -> Result<Option<String>> {
        users::get_password_hash(&self.pool, user_id).await
    }

    pub async fn set_password_hash(&self, user_id: &UserId, password_hash: &str) -> Result<()> {
        users::set_password_hash(&self.pool, user_id, password_hash).await
    }

    // Playlists
    pub async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist> {
        playlists::create(&self.pool, playlist).await
    }

    pub async fn get_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        playlists::get_by_id(&self.pool, id).await
    }

    pub async fn get_playlist_with_songs(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        playlists::get_with_songs(&self.pool, id).await
    }

    pub async fn get_user_playlists(&self, user_id: &UserId) -> Result<Vec<Playlist>> {
        playlists::get_by_user(&self.pool, user_id).await
    }

    pub async fn update_playlist(
        &self,
        id: &PlaylistId,
        user_id: &UserId,
        update: UpdatePlaylist,
    ) -> Result<Option<Playlist>> {
        playlists::update_owned(&self.pool, id, user_id, update).await
    }

    pub async fn delete_playlist(
        &self,
        id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<Option<Playlist>> {
        playlists::delete_owned(&self.pool, id, user_id).await
    }

    // Songs
    pub async fn add_song(
        &self,
        playlist_id: &PlaylistId,
        song: CreatePlaylistSong,
    ) -> Result<PlaylistSong> {
        songs::add_to_playlist(&self.pool, playlist_id, song).await
    }

    pub async fn remove_song(
        &self,
        playlist_id: &PlaylistId,
        song_id: &PlaylistSongId,
    ) -> Result<PlaylistSong> {
        songs::remove_from_playlist(&self.pool, playlist_id, song_id).await
    }
}
