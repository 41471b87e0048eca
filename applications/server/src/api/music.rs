/// Music service proxy routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Body,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use delta_core::{AudioPayload, Song, TrackWithRecommendations, VideoId};
use serde::Deserialize;
use tracing::debug;

/// Largest result count forwarded to the music service
pub const MAX_SEARCH_LIMIT: u32 = 50;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    pub lim: Option<u32>,
}

fn video_id(raw: std::result::Result<Path<String>, PathRejection>) -> Result<VideoId> {
    let Path(id) = raw.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(ServerError::BadRequest("Missing video id".to_string()));
    }
    Ok(VideoId::new(id))
}

/// GET /api/search?query=&lim=
///
/// A blank query answers `[]` without calling the service. Larger limits
/// are capped at [`MAX_SEARCH_LIMIT`].
pub async fn search(
    State(app_state): State<AppState>,
    params: std::result::Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<Song>>> {
    let Query(params) = params?;

    let query = params.query.trim();
    if query.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let limit = params.lim.unwrap_or(app_state.search_limit);
    if limit == 0 {
        return Err(ServerError::BadRequest("lim must be at least 1".to_string()));
    }
    let limit = limit.min(MAX_SEARCH_LIMIT);

    let songs = app_state.music.search(query, limit).await?;
    debug!(query, limit, results = songs.len(), "Search proxied");
    Ok(Json(songs))
}

/// GET /api/player/:id
pub async fn player(
    State(app_state): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<TrackWithRecommendations>> {
    let id = video_id(id)?;
    let listing = app_state.music.recommendations(&id).await?;
    Ok(Json(listing))
}

/// GET /api/stream/:id
///
/// Streams the blob with its upstream content type, or redirects to the
/// direct streaming URL.
pub async fn stream(
    State(app_state): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let id = video_id(id)?;

    match app_state.music.download(&id).await? {
        AudioPayload::Blob {
            bytes,
            content_type,
        } => {
            debug!(track_id = %id, size = bytes.len(), "Streaming blob");
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::CONTENT_LENGTH, bytes.len())
                .header(header::CACHE_CONTROL, "private, max-age=3600")
                .body(Body::from(bytes))
                .map_err(|e| ServerError::Internal(format!("Failed to build response: {}", e)))
        }
        AudioPayload::StreamUrl(url) => {
            debug!(track_id = %id, "Redirecting to stream URL");
            Ok(Redirect::temporary(&url).into_response())
        }
    }
}
