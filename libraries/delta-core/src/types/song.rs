//! Songs as returned by the remote music service
//!
//! The service's JSON is validated on the way in: a `Song` always has a
//! non-empty id and title and a duration of the form `M:SS` or `H:MM:SS`.

use super::ids::VideoId;
use serde::{Deserialize, Serialize};

/// Thumbnail URLs in the two sizes the UI uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnails {
    pub large: String,
    pub mini: String,
}

/// Client-side song view model; immutable once fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSong")]
pub struct Song {
    pub id: VideoId,
    pub title: String,
    pub artists: Vec<String>,
    pub thumbnails: Thumbnails,
    /// Formatted as `MM:SS`
    pub duration: String,
}

#[derive(Deserialize)]
struct RawSong {
    id: String,
    title: String,
    #[serde(default)]
    artists: Vec<String>,
    #[serde(alias = "thumbnail")]
    thumbnails: Thumbnails,
    #[serde(alias = "length")]
    duration: String,
}

impl TryFrom<RawSong> for Song {
    type Error = String;

    fn try_from(raw: RawSong) -> Result<Self, Self::Error> {
        if raw.id.trim().is_empty() {
            return Err("song id must not be empty".to_string());
        }
        if raw.title.trim().is_empty() {
            return Err(format!("song {} has an empty title", raw.id));
        }
        if parse_duration(&raw.duration).is_none() {
            return Err(format!(
                "song {} has malformed duration {:?}",
                raw.id, raw.duration
            ));
        }

        Ok(Self {
            id: VideoId::new(raw.id),
            title: raw.title,
            artists: raw.artists,
            thumbnails: raw.thumbnails,
            duration: raw.duration,
        })
    }
}

impl Song {
    /// Duration in whole seconds
    pub fn duration_secs(&self) -> Option<u64> {
        parse_duration(&self.duration)
    }

    /// Artist names joined for display
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}

/// Current track plus the ordered list of candidate next tracks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackWithRecommendations {
    pub track: Song,
    #[serde(default)]
    pub recommendations: Vec<Song>,
}

/// Parse `M:SS` / `MM:SS` / `H:MM:SS` into seconds
pub fn parse_duration(text: &str) -> Option<u64> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let mut total = 0u64;
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: u64 = part.parse().ok()?;
        // Everything after the leading component is a two-digit 0-59 field
        if i > 0 && (part.len() != 2 || value >= 60) {
            return None;
        }
        total = total * 60 + value;
    }

    Some(total)
}

/// Format seconds as `MM:SS`, or `H:MM:SS` past an hour
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song_json(duration: &str) -> String {
        format!(
            r#"{{"id":"abc","title":"Song","artists":["A","B"],
                "thumbnails":{{"large":"l.jpg","mini":"m.jpg"}},"duration":"{duration}"}}"#
        )
    }

    #[test]
    fn parses_valid_song() {
        let song: Song = serde_json::from_str(&song_json("04:05")).unwrap();
        assert_eq!(song.id.as_str(), "abc");
        assert_eq!(song.duration_secs(), Some(245));
        assert_eq!(song.artist_line(), "A, B");
    }

    #[test]
    fn rejects_malformed_duration() {
        assert!(serde_json::from_str::<Song>(&song_json("4m05")).is_err());
        assert!(serde_json::from_str::<Song>(&song_json("4:5")).is_err());
        assert!(serde_json::from_str::<Song>(&song_json("4:75")).is_err());
    }

    #[test]
    fn accepts_search_endpoint_field_names() {
        let json = r#"{"id":"abc","title":"Song","artists":["A"],
            "thumbnail":{"large":"l.jpg","mini":"m.jpg"},"length":"3:33"}"#;
        let song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(song.thumbnails.mini, "m.jpg");
        assert_eq!(song.duration, "3:33");
    }

    #[test]
    fn rejects_missing_thumbnails() {
        let json = r#"{"id":"abc","title":"Song","artists":[],"duration":"1:00"}"#;
        assert!(serde_json::from_str::<Song>(json).is_err());
    }

    #[test]
    fn rejects_empty_id() {
        let json = r#"{"id":" ","title":"Song","thumbnails":{"large":"l","mini":"m"},"duration":"1:00"}"#;
        assert!(serde_json::from_str::<Song>(json).is_err());
    }

    #[test]
    fn duration_parsing() {
        assert_eq!(parse_duration("0:00"), Some(0));
        assert_eq!(parse_duration("3:33"), Some(213));
        assert_eq!(parse_duration("1:02:03"), Some(3723));
        assert_eq!(parse_duration("3"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("1:2:3:4"), None);
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0.0), "00:00");
        assert_eq!(format_duration(65.9), "01:05");
        assert_eq!(format_duration(3723.0), "1:02:03");
        assert_eq!(format_duration(f64::NAN), "00:00");
        assert_eq!(format_duration(-4.0), "00:00");
    }
}
