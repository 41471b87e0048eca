//! Shared fakes for player tests

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use delta_core::{
    AudioPayload, DeltaError, MusicService, Result as CoreResult, Song, Thumbnails,
    TrackWithRecommendations, VideoId,
};
use delta_playback::{MediaElement, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub fn song(id: &str) -> Song {
    Song {
        id: VideoId::new(id),
        title: format!("Song {id}"),
        artists: vec!["Artist".to_string()],
        thumbnails: Thumbnails {
            large: format!("https://img/{id}/large.jpg"),
            mini: format!("https://img/{id}/mini.jpg"),
        },
        duration: "3:00".to_string(),
    }
}

/// Music service answering from fixed listings
#[derive(Default)]
pub struct FakeMusicService {
    listings: HashMap<String, TrackWithRecommendations>,
    broken_downloads: HashSet<String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeMusicService {
    /// Register a track with its recommendation list
    pub fn with_listing(mut self, track: &str, recommendations: &[&str]) -> Self {
        self.listings.insert(
            track.to_string(),
            TrackWithRecommendations {
                track: song(track),
                recommendations: recommendations.iter().map(|id| song(id)).collect(),
            },
        );
        self
    }

    /// Answer lookups of `track` with the listing registered for `other`
    pub fn with_alias(mut self, track: &str, other: &str) -> Self {
        if let Some(listing) = self.listings.get(other).cloned() {
            self.listings.insert(track.to_string(), listing);
        }
        self
    }

    /// Make downloads of `track` fail
    pub fn with_broken_download(mut self, track: &str) -> Self {
        self.broken_downloads.insert(track.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MusicService for FakeMusicService {
    async fn search(&self, query: &str, limit: u32) -> CoreResult<Vec<Song>> {
        self.record(format!("search:{query}:{limit}"));
        Ok(Vec::new())
    }

    async fn recommendations(&self, video_id: &VideoId) -> CoreResult<TrackWithRecommendations> {
        self.record(format!("recommendations:{video_id}"));
        self.listings
            .get(video_id.as_str())
            .cloned()
            .ok_or_else(|| DeltaError::music_service(format!("unknown track {video_id}")))
    }

    async fn download(&self, video_id: &VideoId) -> CoreResult<AudioPayload> {
        self.record(format!("download:{video_id}"));
        if self.broken_downloads.contains(video_id.as_str()) {
            return Err(DeltaError::music_service("upstream returned 500"));
        }
        Ok(AudioPayload::Blob {
            bytes: Bytes::from(format!("audio-{video_id}")),
            content_type: "audio/webm".to_string(),
        })
    }
}

/// Media element that records what it was asked to do
#[derive(Debug, Default)]
pub struct RecordingMedia {
    pub source: Option<AudioPayload>,
    pub time: f64,
    pub duration: Option<f64>,
    pub paused: bool,
    pub plays: usize,
}

impl MediaElement for RecordingMedia {
    fn set_source(&mut self, audio: &AudioPayload) -> Result<()> {
        self.source = Some(audio.clone());
        self.time = 0.0;
        self.paused = true;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.plays += 1;
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
