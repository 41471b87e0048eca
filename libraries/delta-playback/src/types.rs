//! Core types for playback management

use serde::{Deserialize, Serialize};

/// Whether a loaded track is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playback {
    /// Currently playing
    Playing,

    /// Paused mid-track or stopped at the end
    Paused,
}

/// Player state
///
/// `Idle → Loading → Ready(Playing | Paused)`. Buffering and errors are
/// tracked separately so a stalled stream keeps its play/pause state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Nothing loaded
    Idle,

    /// Fetching metadata or audio
    Loading,

    /// Audio attached to the media element
    Ready(Playback),
}

impl PlayerState {
    /// Whether audio is attached
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Whether audio is attached and running
    pub fn is_playing(self) -> bool {
        self == Self::Ready(Playback::Playing)
    }
}

/// Loop mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    /// Stop when the track ends; navigation stops at the list bounds
    #[default]
    None,

    /// Restart the current track when it ends
    One,

    /// Advance through the recommendation list, wrapping at both ends
    All,
}

impl LoopMode {
    /// The mode the loop button switches to: `none → one → all → none`
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::None => Self::One,
            Self::One => Self::All,
            Self::All => Self::None,
        }
    }

    /// Label shown on the loop button
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::One => "one",
            Self::All => "all",
        }
    }
}

/// Configuration for the player manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial loop mode (default: None)
    pub loop_mode: LoopMode,

    /// Start playing as soon as audio is attached (default: true)
    pub autoplay: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            loop_mode: LoopMode::None,
            autoplay: true,
        }
    }
}
