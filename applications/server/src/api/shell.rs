/// Web shell fallback
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Body,
    extract::{OriginalUri, State},
    http::{header, Method, StatusCode},
    response::Response,
};

/// Serve any non-API `GET` from the shell cache
pub async fn serve(
    State(app_state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Result<Response> {
    let path = uri.path();

    if method != Method::GET && method != Method::HEAD {
        return Err(ServerError::NotFound(format!("No route for {} {}", method, path)));
    }

    let asset = app_state
        .shell
        .fetch(path)
        .await
        .ok_or_else(|| ServerError::NotFound(format!("No asset at {}", path)))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, asset.content_type)
        .body(Body::from(asset.body))
        .map_err(|e| ServerError::Internal(format!("Failed to build response: {}", e)))
}
