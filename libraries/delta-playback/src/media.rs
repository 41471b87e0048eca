//! Platform-agnostic media element trait
//!
//! Abstracts the element that actually decodes and renders audio (an HTML
//! audio element in a browser shell, a native player elsewhere).

use crate::error::Result;
use delta_core::AudioPayload;

/// Platform-agnostic media element
///
/// The element reports progress back through [`crate::MediaEvent`]s; the
/// manager only issues commands and reads the current time.
pub trait MediaElement: Send {
    /// Replace the element's source with new audio
    ///
    /// Resets the current time to zero and leaves the element paused.
    fn set_source(&mut self, audio: &AudioPayload) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Move the playback position
    fn set_current_time(&mut self, seconds: f64);

    /// Track duration in seconds, once metadata has loaded
    fn duration(&self) -> Option<f64>;

    /// Whether the element is paused
    fn is_paused(&self) -> bool;
}

/// In-memory media element for tests
///
/// Records commands; never produces events on its own.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct DummyMediaElement {
    pub source: Option<AudioPayload>,
    pub time: f64,
    pub duration: Option<f64>,
    pub paused: bool,
    pub play_calls: usize,
    pub fail_play: bool,
}

#[cfg(test)]
impl MediaElement for DummyMediaElement {
    fn set_source(&mut self, audio: &AudioPayload) -> Result<()> {
        self.source = Some(audio.clone());
        self.time = 0.0;
        self.duration = None;
        self.paused = true;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.fail_play {
            return Err(crate::PlaybackError::Media("autoplay blocked".to_string()));
        }
        self.play_calls += 1;
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.time = seconds;
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
