//! Playlist types with protection modes

use super::ids::{PlaylistId, UserId};
use super::playlist_song::PlaylistSong;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playlist visibility/mutability flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProtectionMode {
    /// Anyone may add or remove songs
    #[default]
    PublicUnlocked,
    /// Visible, but song mutations are rejected
    PublicLocked,
    /// Song mutations are rejected
    ///
    /// Reads are not restricted; like every playlist, only the owner may
    /// update or delete it.
    Private,
}

impl ProtectionMode {
    /// Convert to the string stored in the database
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublicUnlocked => "PUBLIC_UNLOCKED",
            Self::PublicLocked => "PUBLIC_LOCKED",
            Self::Private => "PRIVATE",
        }
    }

    /// Whether `addSong`/`removeSong` may touch a playlist in this mode
    #[must_use]
    pub fn allows_song_mutation(&self) -> bool {
        matches!(self, Self::PublicUnlocked)
    }
}

impl fmt::Display for ProtectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtectionMode {
    type Err = crate::DeltaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLIC_UNLOCKED" => Ok(Self::PublicUnlocked),
            "PUBLIC_LOCKED" => Ok(Self::PublicLocked),
            "PRIVATE" => Ok(Self::Private),
            other => Err(crate::DeltaError::invalid_input(format!(
                "unknown protection mode: {other}"
            ))),
        }
    }
}

/// Persisted playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub description: Option<String>,
    pub user_id: UserId,
    pub protection: ProtectionMode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Songs in playlist (populated when requested)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songs: Option<Vec<PlaylistSong>>,
}

impl Playlist {
    /// Whether `user_id` owns this playlist
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

/// Data for creating a new playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
    pub description: Option<String>,
    pub user_id: UserId,
    pub protection: ProtectionMode,
}

/// Data for updating a playlist
///
/// Every field is written; an omitted description clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlaylist {
    pub name: String,
    pub description: Option<String>,
    pub protection: ProtectionMode,
}
