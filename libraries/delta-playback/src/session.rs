//! Player session
//!
//! Drives a [`PlayerManager`] with data from a [`MusicService`]: opening a
//! track fetches its metadata and recommendation list, then its audio.
//! The two fetches are independent, so a track whose recommendations fail
//! still plays with an empty list. Failures are logged and recorded on the
//! player (error flag plus an `Error` event). Nothing is retried.

use crate::{
    error::{PlaybackError, Result},
    events::{MediaEvent, PlayerEvent},
    manager::PlayerManager,
    media::MediaElement,
    types::LoopMode,
};
use delta_core::{DeltaError, MusicService, VideoId};
use tracing::{debug, info, warn};

/// Player bound to a music service
pub struct PlayerSession<S, M: MediaElement> {
    service: S,
    player: PlayerManager<M>,
}

impl<S: MusicService, M: MediaElement> PlayerSession<S, M> {
    /// Create a session
    pub fn new(service: S, player: PlayerManager<M>) -> Self {
        Self { service, player }
    }

    /// Open a track from outside the recommendation list (route change)
    ///
    /// Replaces the recommendation list with the one returned for `id`.
    /// When that lookup fails the error flag is set, the list is left
    /// empty and the audio is still fetched; only a failed download makes
    /// this return an error.
    pub async fn open(&mut self, id: VideoId) -> Result<()> {
        info!(track_id = %id, "Opening track");
        self.player.begin_loading(id.clone());

        match self.service.recommendations(&id).await {
            Ok(listing) => self.player.set_listing(listing),
            Err(e) => {
                warn!(track_id = %id, error = %e, "Recommendations unavailable");
                self.player.listing_failed(e.to_string());
            }
        }

        self.load_audio(&id).await
    }

    /// Next button
    ///
    /// Returns `false` without fetching anything when there is no next track.
    pub async fn next(&mut self) -> Result<bool> {
        match self.player.next() {
            Some(id) => self.load_audio(&id).await.map(|()| true),
            None => Ok(false),
        }
    }

    /// Previous button
    ///
    /// Returns `false` without fetching anything when there is no previous track.
    pub async fn previous(&mut self) -> Result<bool> {
        match self.player.previous() {
            Some(id) => self.load_audio(&id).await.map(|()| true),
            None => Ok(false),
        }
    }

    /// Apply a media element callback, fetching audio if the track advanced
    pub async fn handle_media_event(&mut self, event: MediaEvent) -> Result<()> {
        match self.player.handle_media_event(event) {
            Some(id) => self.load_audio(&id).await,
            None => Ok(()),
        }
    }

    /// Play/pause button
    pub fn toggle_play(&mut self) -> Result<()> {
        self.player.toggle_play()
    }

    /// Seek bar
    pub fn seek(&mut self, seconds: f64) -> Result<f64> {
        self.player.seek(seconds)
    }

    /// Loop button
    pub fn cycle_loop(&mut self) -> LoopMode {
        self.player.cycle_loop()
    }

    /// Drain pending UI events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        self.player.drain_events()
    }

    /// Underlying player
    pub fn player(&self) -> &PlayerManager<M> {
        &self.player
    }

    /// Mutable underlying player
    pub fn player_mut(&mut self) -> &mut PlayerManager<M> {
        &mut self.player
    }

    /// Music service in use
    pub fn service(&self) -> &S {
        &self.service
    }

    async fn load_audio(&mut self, id: &VideoId) -> Result<()> {
        let audio = match self.service.download(id).await {
            Ok(audio) => audio,
            Err(e) => return Err(self.fail(id, e)),
        };
        debug!(track_id = %id, bytes = ?audio.len(), "Audio fetched");

        // attach_audio records its own failures on the player
        if let Err(e) = self.player.attach_audio(id, &audio) {
            warn!(track_id = %id, error = %e, "Failed to attach audio");
            return Err(e);
        }
        Ok(())
    }

    fn fail(&mut self, id: &VideoId, error: DeltaError) -> PlaybackError {
        warn!(track_id = %id, error = %error, "Failed to load track");
        self.player.fail(error.to_string());
        PlaybackError::MusicService(error)
    }
}
