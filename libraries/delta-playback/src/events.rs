//! Player events
//!
//! `MediaEvent`s flow in from the media element; `PlayerEvent`s are queued
//! by the manager for UI synchronization and drained by the caller.

use crate::types::{LoopMode, PlayerState};
use delta_core::VideoId;
use serde::{Deserialize, Serialize};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Player state changed (loading, playing, paused, idle)
    StateChanged {
        /// The new state
        state: PlayerState,
    },

    /// Current track changed
    TrackChanged {
        /// ID of the new (current) track
        track_id: VideoId,
        /// ID of the previous track (if any)
        previous_track_id: Option<VideoId>,
    },

    /// Loop button cycled
    LoopModeChanged {
        /// The new loop mode
        mode: LoopMode,
    },

    /// Seek bar should move
    PositionChanged {
        /// Current position in seconds
        position: f64,
        /// Track duration in seconds, once known
        duration: Option<f64>,
    },

    /// Stream stalled or resumed
    BufferingChanged {
        /// Whether the media element is waiting for data
        buffering: bool,
    },

    /// Loading or playback failed
    Error {
        /// Error message
        message: String,
    },
}

/// Callbacks from the media element
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback position advanced
    TimeUpdate {
        /// Position in seconds
        current_time: f64,
    },

    /// Duration became known
    LoadedMetadata {
        /// Duration in seconds
        duration: f64,
    },

    /// Reached the end of the track
    Ended,

    /// Playback stalled waiting for data
    Waiting,

    /// Enough data buffered to continue
    CanPlay,

    /// The element failed to load or decode the source
    Error {
        /// Error message
        message: String,
    },
}
