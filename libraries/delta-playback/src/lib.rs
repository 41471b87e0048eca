//! Delta Music - Player State Machine
//!
//! Platform-agnostic playback control for the player page.
//!
//! This crate provides:
//! - Player state (`Idle → Loading → Ready(Playing | Paused)`) with
//!   independent buffering and error flags
//! - Loop modes (none, one, all) and end-of-track handling
//! - Next/previous navigation bounded by the recommendation list
//! - Seek clamped to the track duration
//! - An event queue for UI synchronization
//!
//! # Architecture
//!
//! Audio decoding belongs to a [`MediaElement`] implementation supplied by
//! the platform. [`PlayerManager`] is synchronous and owns all state;
//! [`PlayerSession`] adds the network steps through a
//! [`delta_core::MusicService`].
//!
//! # Example
//!
//! ```rust
//! use delta_playback::{types::LoopMode, PlayerConfig, PlayerManager};
//! # use delta_playback::{MediaElement, Result};
//! # use delta_core::AudioPayload;
//! # struct Silent;
//! # impl MediaElement for Silent {
//! #     fn set_source(&mut self, _: &AudioPayload) -> Result<()> { Ok(()) }
//! #     fn play(&mut self) -> Result<()> { Ok(()) }
//! #     fn pause(&mut self) {}
//! #     fn current_time(&self) -> f64 { 0.0 }
//! #     fn set_current_time(&mut self, _: f64) {}
//! #     fn duration(&self) -> Option<f64> { None }
//! #     fn is_paused(&self) -> bool { true }
//! # }
//!
//! let mut player = PlayerManager::new(Silent, PlayerConfig::default());
//!
//! assert_eq!(player.cycle_loop(), LoopMode::One);
//! assert_eq!(player.cycle_loop(), LoopMode::All);
//! assert_eq!(player.cycle_loop(), LoopMode::None);
//! assert!(!player.has_next());
//! ```

mod error;
mod events;
mod manager;
mod media;
mod session;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::{MediaEvent, PlayerEvent};
pub use manager::PlayerManager;
pub use media::MediaElement;
pub use session::PlayerSession;
pub use types::{LoopMode, Playback, PlayerConfig, PlayerState};
