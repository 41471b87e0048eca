/// Playable audio as returned by the music service download endpoint
use bytes::Bytes;

/// Audio for one track: either the whole file or a URL the media element can stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioPayload {
    /// Complete audio file held in memory
    Blob {
        /// Raw encoded audio
        bytes: Bytes,
        /// MIME type reported by the service (e.g. `audio/webm`)
        content_type: String,
    },

    /// Direct streaming URL
    StreamUrl(String),
}

impl AudioPayload {
    /// Size in bytes for blobs, `None` for streaming URLs
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Blob { bytes, .. } => Some(bytes.len()),
            Self::StreamUrl(_) => None,
        }
    }

    /// Whether this is an empty blob
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Blob { bytes, .. } if bytes.is_empty())
    }
}
