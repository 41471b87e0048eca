/// Server error types
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use delta_core::DeltaError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Music service error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Storage error: {0}")]
    Storage(#[from] delta_storage::StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl ServerError {
    /// Status code and wire error code
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::Auth(_) | ServerError::Jwt(_) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            ServerError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ServerError::Upstream(_) => (StatusCode::BAD_GATEWAY, "BAD_GATEWAY"),
            ServerError::Internal(_)
            | ServerError::Storage(_)
            | ServerError::Config(_)
            | ServerError::Io(_)
            | ServerError::Bcrypt(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<DeltaError> for ServerError {
    fn from(err: DeltaError) -> Self {
        match err {
            DeltaError::NotFound { .. }
            | DeltaError::PlaylistNotFound(_)
            | DeltaError::SongNotFound { .. } => ServerError::NotFound(err.to_string()),
            DeltaError::Forbidden(msg) => ServerError::Forbidden(msg),
            DeltaError::InvalidInput(msg) => ServerError::BadRequest(msg),
            DeltaError::MusicService(msg) => ServerError::Upstream(msg),
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();

        let message = match self {
            ServerError::Auth(msg)
            | ServerError::Forbidden(msg)
            | ServerError::NotFound(msg)
            | ServerError::BadRequest(msg) => msg,
            ServerError::Upstream(ref msg) => {
                tracing::warn!("Music service error: {}", msg);
                "Music service unavailable".to_string()
            }
            ServerError::Jwt(ref e) => {
                tracing::warn!("JWT error: {:?}", e);
                "Invalid token".to_string()
            }
            ServerError::Storage(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                "Database error".to_string()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Configuration error".to_string()
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                "IO error".to_string()
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                "Password error".to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
