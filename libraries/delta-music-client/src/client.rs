//! Music microservice client.

use crate::error::{MusicClientError, Result};
use crate::types::{ServiceConfig, StreamUrlResponse};
use async_trait::async_trait;
use delta_core::{AudioPayload, MusicService, Song, TrackWithRecommendations, VideoId};
use reqwest::{header::CONTENT_TYPE, Client, Response, StatusCode};
use tracing::{debug, info};
use url::Url;

/// Client for the catalogue microservice.
///
/// Wraps its three endpoints: `/search`, `/recommendations` and `/download`.
/// Cheap to clone; clones share the connection pool.
///
/// # Example
///
/// ```ignore
/// use delta_music_client::{MusicServiceClient, ServiceConfig};
///
/// let client = MusicServiceClient::new(ServiceConfig::new("https://music-api.example.com"))?;
/// let songs = client.search("never gonna", 15).await?;
/// let listing = client.recommendations(&songs[0].id).await?;
/// let audio = client.download(&listing.track.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct MusicServiceClient {
    http: Client,
    base_url: String,
}

impl MusicServiceClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let url = config.url.trim();
        if url.is_empty() {
            return Err(MusicClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(MusicClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&url).map_err(|e| MusicClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("DeltaMusic/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: url,
        })
    }

    /// Get the normalized service URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        Url::parse_with_params(&format!("{}/{}", self.base_url, path), params)
            .map_err(|e| MusicClientError::InvalidUrl(e.to_string()))
    }

    async fn get(&self, url: Url, video_id: Option<&VideoId>) -> Result<Response> {
        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                MusicClientError::ServiceUnreachable(e.to_string())
            } else {
                MusicClientError::Request(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match (status, video_id) {
            (StatusCode::NOT_FOUND, Some(id)) => Err(MusicClientError::NotFound(id.to_string())),
            _ => {
                let error_text = response.text().await.unwrap_or_default();
                Err(MusicClientError::ServiceError {
                    status: status.as_u16(),
                    message: error_text,
                })
            }
        }
    }

    /// Search the catalogue.
    ///
    /// `GET /search?query=&lim=`
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<Song>> {
        let lim = limit.to_string();
        let url = self.endpoint("search", &[("query", query), ("lim", &lim)])?;
        debug!(url = %url, "Searching");

        let songs: Vec<Song> = self.get(url, None).await?.json().await.map_err(|e| {
            MusicClientError::ParseError(format!("Failed to parse search results: {}", e))
        })?;

        debug!(query = %query, results = songs.len(), "Search complete");
        Ok(songs)
    }

    /// Fetch a track with its recommendation list.
    ///
    /// `GET /recommendations?video_id=`
    pub async fn recommendations(&self, video_id: &VideoId) -> Result<TrackWithRecommendations> {
        let url = self.endpoint("recommendations", &[("video_id", video_id.as_str())])?;
        debug!(url = %url, "Fetching recommendations");

        let listing: TrackWithRecommendations = self
            .get(url, Some(video_id))
            .await?
            .json()
            .await
            .map_err(|e| {
                MusicClientError::ParseError(format!("Failed to parse recommendations: {}", e))
            })?;

        debug!(
            track_id = %listing.track.id,
            recommendations = listing.recommendations.len(),
            "Fetched recommendations"
        );
        Ok(listing)
    }

    /// Fetch playable audio.
    ///
    /// `GET /download?video_id=` answers either with the audio itself or with
    /// a JSON `{"url": ...}` body pointing at a direct stream.
    pub async fn download(&self, video_id: &VideoId) -> Result<AudioPayload> {
        let url = self.endpoint("download", &[("video_id", video_id.as_str())])?;
        debug!(url = %url, "Downloading audio");

        let response = self.get(url, Some(video_id)).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        if content_type.starts_with("application/json") {
            let body: StreamUrlResponse = response.json().await.map_err(|e| {
                MusicClientError::ParseError(format!("Failed to parse stream URL: {}", e))
            })?;
            info!(track_id = %video_id, "Resolved streaming URL");
            return Ok(AudioPayload::StreamUrl(body.url));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(MusicClientError::ParseError(format!(
                "Empty audio body for {}",
                video_id
            )));
        }

        info!(
            track_id = %video_id,
            size = bytes.len(),
            content_type = %content_type,
            "Audio downloaded"
        );
        Ok(AudioPayload::Blob {
            bytes,
            content_type,
        })
    }
}

#[async_trait]
impl MusicService for MusicServiceClient {
    async fn search(&self, query: &str, limit: u32) -> delta_core::Result<Vec<Song>> {
        Ok(MusicServiceClient::search(self, query, limit).await?)
    }

    async fn recommendations(
        &self,
        video_id: &VideoId,
    ) -> delta_core::Result<TrackWithRecommendations> {
        Ok(MusicServiceClient::recommendations(self, video_id).await?)
    }

    async fn download(&self, video_id: &VideoId) -> delta_core::Result<AudioPayload> {
        Ok(MusicServiceClient::download(self, video_id).await?)
    }
}
