/// Authentication API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use delta_core::UserId;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    pub user_id: UserId,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

fn invalid_credentials() -> ServerError {
    ServerError::Auth("Invalid username or password".to_string())
}

/// POST /api/auth/login
pub async fn login(
    State(app_state): State<AppState>,
    req: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(req) = req?;

    let user = app_state
        .db
        .find_user_by_name(&req.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    // Users created without credentials cannot log in
    let password_hash = app_state
        .db
        .get_password_hash(&user.id)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !app_state
        .auth_service
        .verify_password(&req.password, &password_hash)?
    {
        warn!(username = %req.username, "Login rejected");
        return Err(invalid_credentials());
    }

    let tokens = app_state.auth_service.issue_tokens(&user.id)?;
    info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: app_state.auth_service.access_token_ttl(),
        user_id: user.id,
        username: user.name,
    }))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(app_state): State<AppState>,
    req: std::result::Result<Json<RefreshRequest>, JsonRejection>,
) -> Result<Json<RefreshResponse>> {
    let Json(req) = req?;

    let user_id = app_state
        .auth_service
        .verify_refresh_token(&req.refresh_token)?;

    // A token may outlive its user
    if app_state.db.get_user(&user_id).await?.is_none() {
        return Err(ServerError::Auth("Unknown user".to_string()));
    }

    let access_token = app_state.auth_service.create_access_token(&user_id)?;

    Ok(Json(RefreshResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: app_state.auth_service.access_token_ttl(),
    }))
}
