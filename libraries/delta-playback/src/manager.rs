//! Player manager - core state machine
//!
//! Owns the media element, the current track, the recommendation list and
//! the loop mode. All transitions happen synchronously in response to user
//! actions or media element callbacks; fetching is left to the caller (see
//! [`crate::PlayerSession`]).

use crate::{
    error::{PlaybackError, Result},
    events::{MediaEvent, PlayerEvent},
    media::MediaElement,
    types::{LoopMode, Playback, PlayerConfig, PlayerState},
};
use delta_core::{format_duration, AudioPayload, Song, TrackWithRecommendations, VideoId};
use tracing::{debug, warn};

/// Player state machine
///
/// Navigation is bounded by the recommendation list of the track that was
/// opened from outside. Moving through that list keeps it; opening another
/// track replaces it once its metadata arrives.
pub struct PlayerManager<M: MediaElement> {
    media: M,

    state: PlayerState,
    buffering: bool,
    error: Option<String>,

    loop_mode: LoopMode,
    autoplay: bool,

    // Id of the track being loaded or played, known before its metadata
    current_id: Option<VideoId>,
    track: Option<Song>,
    recommendations: Vec<Song>,
    // Index of the current track inside `recommendations`, if it is in there
    cursor: Option<usize>,

    position: f64,
    duration: Option<f64>,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl<M: MediaElement> PlayerManager<M> {
    /// Create a player around a media element
    pub fn new(media: M, config: PlayerConfig) -> Self {
        Self {
            media,
            state: PlayerState::Idle,
            buffering: false,
            error: None,
            loop_mode: config.loop_mode,
            autoplay: config.autoplay,
            current_id: None,
            track: None,
            recommendations: Vec::new(),
            cursor: None,
            position: 0.0,
            duration: None,
            pending_events: Vec::new(),
        }
    }

    /// Create a player with the default configuration
    pub fn with_media(media: M) -> Self {
        Self::new(media, PlayerConfig::default())
    }

    // ===== Loading =====

    /// Start loading a track
    ///
    /// Stops the current audio and enters `Loading`. The recommendation list
    /// is kept until [`Self::set_listing`] replaces it, but the cursor is
    /// cleared since the new track may not be part of it.
    pub fn begin_loading(&mut self, id: VideoId) {
        self.media.pause();

        let previous = self.current_id.replace(id.clone());
        if previous.as_ref() != Some(&id) {
            self.pending_events.push(PlayerEvent::TrackChanged {
                track_id: id,
                previous_track_id: previous,
            });
        }

        self.track = None;
        self.cursor = None;
        self.position = 0.0;
        self.duration = None;
        self.error = None;
        self.set_buffering(false);
        self.set_state(PlayerState::Loading);
    }

    /// Install the metadata and recommendation list of the loading track
    ///
    /// The track being loaded stays the one passed to
    /// [`Self::begin_loading`], even when the service answers with metadata
    /// for a different id. The cursor is located from that requested id.
    pub fn set_listing(&mut self, listing: TrackWithRecommendations) {
        let TrackWithRecommendations {
            track,
            recommendations,
        } = listing;

        if self.current_id.as_ref() != Some(&track.id) {
            warn!(
                requested = ?self.current_id,
                returned = %track.id,
                "Listing describes a different track"
            );
        }

        self.cursor = self
            .current_id
            .as_ref()
            .and_then(|id| recommendations.iter().position(|song| &song.id == id));
        debug!(
            track_id = %track.id,
            recommendations = recommendations.len(),
            cursor = ?self.cursor,
            "Listing loaded"
        );

        self.track = Some(track);
        self.recommendations = recommendations;
    }

    /// Drop the recommendation list after its fetch failed
    ///
    /// The failure is reported through the error flag, but the loading track
    /// keeps loading so its audio can still be attached.
    pub fn listing_failed(&mut self, message: impl Into<String>) {
        self.track = None;
        self.cursor = None;
        self.recommendations.clear();
        self.report_error(message.into());
    }

    /// Attach fetched audio to the media element
    ///
    /// Audio for any other track than the one being loaded is rejected.
    /// Playback starts right away when autoplay is on; a refused `play()`
    /// leaves the track paused.
    pub fn attach_audio(&mut self, id: &VideoId, audio: &AudioPayload) -> Result<()> {
        if self.current_id.as_ref() != Some(id) {
            let message = format!("audio for {id} does not match the current track");
            self.fail(message.clone());
            return Err(PlaybackError::InvalidOperation(message));
        }

        if let Err(e) = self.media.set_source(audio) {
            self.fail(e.to_string());
            return Err(e);
        }
        self.position = 0.0;
        self.duration = self.media.duration();

        let playback = if self.autoplay {
            match self.media.play() {
                Ok(()) => Playback::Playing,
                Err(e) => {
                    warn!(track_id = %id, error = %e, "Autoplay refused");
                    Playback::Paused
                }
            }
        } else {
            Playback::Paused
        };

        self.set_state(PlayerState::Ready(playback));
        Ok(())
    }

    /// Record a failed load or playback error
    ///
    /// A failure while loading drops back to `Idle`; a failure during
    /// playback keeps the current state.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.report_error(message.into());

        if self.state == PlayerState::Loading {
            self.set_state(PlayerState::Idle);
        }
    }

    fn report_error(&mut self, message: String) {
        self.error = Some(message.clone());
        self.pending_events.push(PlayerEvent::Error { message });
    }

    // ===== Playback Control =====

    /// Start or resume playback
    pub fn play(&mut self) -> Result<()> {
        match self.state {
            PlayerState::Ready(Playback::Paused) => {
                self.media.play()?;
                self.set_state(PlayerState::Ready(Playback::Playing));
                Ok(())
            }
            PlayerState::Ready(Playback::Playing) => Ok(()),
            PlayerState::Idle | PlayerState::Loading => Err(PlaybackError::NoTrackLoaded),
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.state == PlayerState::Ready(Playback::Playing) {
            self.media.pause();
            self.set_state(PlayerState::Ready(Playback::Paused));
        }
    }

    /// Play/pause button
    pub fn toggle_play(&mut self) -> Result<()> {
        if self.state.is_playing() {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Move the playback position
    ///
    /// The target is clamped to `[0, duration]` (non-finite input seeks to
    /// the start). Returns the position actually applied.
    pub fn seek(&mut self, seconds: f64) -> Result<f64> {
        if !self.state.is_ready() {
            return Err(PlaybackError::NoTrackLoaded);
        }

        let mut target = if seconds.is_finite() {
            seconds.max(0.0)
        } else {
            0.0
        };
        if let Some(duration) = self.duration() {
            target = target.min(duration);
        }

        self.media.set_current_time(target);
        self.set_position(target);
        Ok(target)
    }

    /// Loop button: `none → one → all → none`
    pub fn cycle_loop(&mut self) -> LoopMode {
        self.set_loop_mode(self.loop_mode.cycle());
        self.loop_mode
    }

    /// Set the loop mode directly
    pub fn set_loop_mode(&mut self, mode: LoopMode) {
        if self.loop_mode != mode {
            self.loop_mode = mode;
            self.pending_events
                .push(PlayerEvent::LoopModeChanged { mode });
        }
    }

    // ===== Navigation =====

    fn next_index(&self) -> Option<usize> {
        let len = self.recommendations.len();
        if len == 0 {
            return None;
        }

        match self.cursor {
            None => Some(0),
            Some(i) if i + 1 < len => Some(i + 1),
            Some(_) if self.loop_mode == LoopMode::All => Some(0),
            Some(_) => None,
        }
    }

    fn previous_index(&self) -> Option<usize> {
        match self.cursor {
            Some(i) if i > 0 => Some(i - 1),
            Some(_) if self.loop_mode == LoopMode::All => {
                Some(self.recommendations.len() - 1)
            }
            _ => None,
        }
    }

    /// Whether the next button is enabled
    pub fn has_next(&self) -> bool {
        self.next_index().is_some()
    }

    /// Whether the previous button is enabled
    pub fn has_previous(&self) -> bool {
        self.previous_index().is_some()
    }

    /// Skip to the next recommendation
    ///
    /// Returns the id whose audio must now be fetched, or `None` at the end
    /// of the list (unless loop mode is `all`, which wraps).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<VideoId> {
        let index = self.next_index()?;
        Some(self.jump_to(index))
    }

    /// Go back to the previous recommendation
    ///
    /// Returns the id whose audio must now be fetched, or `None` at the start
    /// of the list (unless loop mode is `all`, which wraps).
    pub fn previous(&mut self) -> Option<VideoId> {
        let index = self.previous_index()?;
        Some(self.jump_to(index))
    }

    fn jump_to(&mut self, index: usize) -> VideoId {
        let song = self.recommendations[index].clone();
        let id = song.id.clone();

        self.begin_loading(id.clone());
        self.cursor = Some(index);
        self.track = Some(song);
        id
    }

    // ===== Media Events =====

    /// Apply a media element callback
    ///
    /// Returns the id whose audio must be fetched when the end of a track
    /// advances to another one.
    pub fn handle_media_event(&mut self, event: MediaEvent) -> Option<VideoId> {
        match event {
            MediaEvent::TimeUpdate { current_time } => {
                if current_time.is_finite() {
                    self.set_position(current_time);
                }
                if self.state.is_playing() && self.media.is_paused() {
                    self.set_state(PlayerState::Ready(Playback::Paused));
                }
                None
            }
            MediaEvent::LoadedMetadata { duration } => {
                if duration.is_finite() && duration >= 0.0 {
                    self.duration = Some(duration);
                    self.set_position(self.position);
                }
                if self.state.is_ready() {
                    let playback = if self.media.is_paused() {
                        Playback::Paused
                    } else {
                        Playback::Playing
                    };
                    self.set_state(PlayerState::Ready(playback));
                }
                None
            }
            MediaEvent::Ended => self.handle_track_end(),
            MediaEvent::Waiting => {
                self.set_buffering(true);
                None
            }
            MediaEvent::CanPlay => {
                self.set_buffering(false);
                None
            }
            MediaEvent::Error { message } => {
                warn!(track_id = ?self.current_id, error = %message, "Media element error");
                self.fail(message);
                None
            }
        }
    }

    fn handle_track_end(&mut self) -> Option<VideoId> {
        if !self.state.is_ready() {
            return None;
        }

        match self.loop_mode {
            LoopMode::None => {
                self.set_state(PlayerState::Ready(Playback::Paused));
                None
            }
            LoopMode::One => {
                self.restart();
                None
            }
            LoopMode::All => match self.next_index() {
                Some(index) => Some(self.jump_to(index)),
                None => {
                    self.restart();
                    None
                }
            },
        }
    }

    fn restart(&mut self) {
        self.media.set_current_time(0.0);
        self.set_position(0.0);

        match self.media.play() {
            Ok(()) => self.set_state(PlayerState::Ready(Playback::Playing)),
            Err(e) => {
                self.set_state(PlayerState::Ready(Playback::Paused));
                self.fail(e.to_string());
            }
        }
    }

    // ===== State Queries =====

    /// Current state
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Whether audio is running
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Whether the media element is waiting for data
    pub fn is_buffering(&self) -> bool {
        self.buffering
    }

    /// Last error, cleared when the next track starts loading
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current loop mode
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// Id of the track being loaded or played
    pub fn current_id(&self) -> Option<&VideoId> {
        self.current_id.as_ref()
    }

    /// Metadata of the current track, once known
    pub fn current_track(&self) -> Option<&Song> {
        self.track.as_ref()
    }

    /// Recommendation list that bounds navigation
    pub fn recommendations(&self) -> &[Song] {
        &self.recommendations
    }

    /// Index of the current track in the recommendation list
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Playback position in seconds
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Track duration in seconds, once known
    pub fn duration(&self) -> Option<f64> {
        self.duration
            .or_else(|| self.media.duration())
            .filter(|d| d.is_finite() && *d >= 0.0)
    }

    /// Position formatted for the seek bar label
    pub fn position_label(&self) -> String {
        format_duration(self.position)
    }

    /// Duration formatted for the seek bar label
    pub fn duration_label(&self) -> String {
        format_duration(self.duration().unwrap_or(0.0))
    }

    /// Media element
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Mutable media element
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    // ===== Event System =====

    /// Drain all pending events
    ///
    /// Call this after every action or media callback to keep the UI in sync.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn set_state(&mut self, state: PlayerState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlayerEvent::StateChanged { state });
        }
    }

    fn set_buffering(&mut self, buffering: bool) {
        if self.buffering != buffering {
            self.buffering = buffering;
            self.pending_events
                .push(PlayerEvent::BufferingChanged { buffering });
        }
    }

    fn set_position(&mut self, position: f64) {
        self.position = position;
        self.pending_events.push(PlayerEvent::PositionChanged {
            position,
            duration: self.duration(),
        });
    }
}
