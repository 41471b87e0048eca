//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! so every pooled connection sees the same schema and foreign keys.

#![allow(dead_code)]

use delta_core::types::*;
use delta_storage::Database;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub db: Database,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let db = Database::open(&db_url)
            .await
            .expect("Failed to open test database");

        Self {
            db,
            _temp_dir: temp_dir,
        }
    }
}

/// Test fixture: Create a test user
pub async fn create_test_user(db: &Database, name: &str) -> UserId {
    db.create_user(name)
        .await
        .expect("Failed to create test user")
        .id
}

/// Test fixture: Create a playlist with the given protection
pub async fn create_test_playlist(
    db: &Database,
    name: &str,
    owner: &UserId,
    protection: ProtectionMode,
) -> Playlist {
    db.create_playlist(CreatePlaylist {
        name: name.to_string(),
        description: None,
        user_id: owner.clone(),
        protection,
    })
    .await
    .expect("Failed to create test playlist")
}

/// Test fixture: song payload as the add-song procedure receives it
pub fn test_song(name: &str) -> CreatePlaylistSong {
    CreatePlaylistSong {
        video_id: Some(VideoId::new(format!("vid-{name}"))),
        name: name.to_string(),
        artist: "Test Artist".to_string(),
        album: None,
    }
}
