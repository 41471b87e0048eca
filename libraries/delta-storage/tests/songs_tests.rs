//! Integration tests for playlist songs
//!
//! Song mutation is gated by the playlist's protection mode.

mod test_helpers;

use delta_core::{types::*, DeltaError};
use test_helpers::*;

#[tokio::test]
async fn test_add_song_to_unlocked_playlist() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;

    let alice = create_test_user(db, "alice").await;
    let playlist = create_test_playlist(db, "Open", &alice, ProtectionMode::PublicUnlocked).await;

    let song = db
        .add_song(
            &playlist.id,
            CreatePlaylistSong {
                video_id: Some(VideoId::new("dQw4w9WgXcQ")),
                name: "Never Gonna Give You Up".to_string(),
                artist: "Rick Astley".to_string(),
                album: Some("Whenever You Need Somebody".to_string()),
            },
        )
        .await
        .expect("unlocked playlist accepts songs");

    assert_eq!(song.name, "Never Gonna Give You Up");
    assert_eq!(song.artist, "Rick Astley");
    assert_eq!(song.album.as_deref(), Some("Whenever You Need Somebody"));
    assert_eq!(song.video_id, Some(VideoId::new("dQw4w9WgXcQ")));
    assert_eq!(song.playlist_id.as_ref(), Some(&playlist.id));

    let touched = db.get_playlist(&playlist.id).await.unwrap().unwrap();
    assert!(touched.updated_at >= playlist.updated_at);
}

#[tokio::test]
async fn test_add_song_to_locked_playlist_is_forbidden() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;

    let alice = create_test_user(db, "alice").await;
    let playlist = create_test_playlist(db, "Locked", &alice, ProtectionMode::PublicLocked).await;

    let err = db
        .add_song(&playlist.id, test_song("blocked"))
        .await
        .unwrap_err();
    assert!(matches!(err, DeltaError::Forbidden(_)), "got {err:?}");

    let with_songs = db.get_playlist_with_songs(&playlist.id).await.unwrap().unwrap();
    assert!(with_songs.songs.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_song_to_private_playlist_is_forbidden() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;

    let alice = create_test_user(db, "alice").await;
    let playlist = create_test_playlist(db, "Secret", &alice, ProtectionMode::Private).await;

    let err = db
        .add_song(&playlist.id, test_song("blocked"))
        .await
        .unwrap_err();
    assert!(matches!(err, DeltaError::Forbidden(_)), "got {err:?}");
}

#[tokio::test]
async fn test_add_song_to_missing_playlist_is_not_found() {
    let test_db = TestDb::new().await;

    let err = test_db
        .db
        .add_song(&PlaylistId::new("missing"), test_song("orphan"))
        .await
        .unwrap_err();
    assert!(matches!(err, DeltaError::PlaylistNotFound(_)), "got {err:?}");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_remove_song() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;

    let alice = create_test_user(db, "alice").await;
    let playlist = create_test_playlist(db, "Open", &alice, ProtectionMode::PublicUnlocked).await;
    let keep = db.add_song(&playlist.id, test_song("keep")).await.unwrap();
    let dropped = db.add_song(&playlist.id, test_song("drop")).await.unwrap();

    let removed = db.remove_song(&playlist.id, &dropped.id).await.unwrap();
    assert_eq!(removed.id, dropped.id);

    let songs = db
        .get_playlist_with_songs(&playlist.id)
        .await
        .unwrap()
        .unwrap()
        .songs
        .unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].id, keep.id);
}

#[tokio::test]
async fn test_remove_song_after_locking_is_forbidden() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;

    let alice = create_test_user(db, "alice").await;
    let playlist = create_test_playlist(db, "Open", &alice, ProtectionMode::PublicUnlocked).await;
    let song = db.add_song(&playlist.id, test_song("stuck")).await.unwrap();

    db.update_playlist(
        &playlist.id,
        &alice,
        UpdatePlaylist {
            name: playlist.name.clone(),
            description: None,
            protection: ProtectionMode::PublicLocked,
        },
    )
    .await
    .unwrap()
    .unwrap();

    let err = db.remove_song(&playlist.id, &song.id).await.unwrap_err();
    assert!(matches!(err, DeltaError::Forbidden(_)), "got {err:?}");
}

#[tokio::test]
async fn test_remove_song_from_other_playlist_is_not_found() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;

    let alice = create_test_user(db, "alice").await;
    let first = create_test_playlist(db, "First", &alice, ProtectionMode::PublicUnlocked).await;
    let second = create_test_playlist(db, "Second", &alice, ProtectionMode::PublicUnlocked).await;
    let song = db.add_song(&first.id, test_song("mine")).await.unwrap();

    let err = db.remove_song(&second.id, &song.id).await.unwrap_err();
    assert!(matches!(err, DeltaError::SongNotFound { .. }), "got {err:?}");

    let still_there = db
        .get_playlist_with_songs(&first.id)
        .await
        .unwrap()
        .unwrap()
        .songs
        .unwrap();
    assert_eq!(still_there.len(), 1);
}
