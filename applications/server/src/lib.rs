//! Delta Music Server Library
//!
//! Playlist procedures behind JWT sessions, a proxy for the music
//! microservice, and the cached web shell.
//!
//! This library exposes the router and its components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{auth::AuthService, shell_cache::ShellCache};
pub use state::AppState;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
///
/// `/api` carries the public routes (health, auth, music proxy) and the
/// session-protected playlist procedures; everything else is answered by
/// the shell cache.
pub fn create_router(app_state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/refresh", post(api::auth::refresh))
        .route("/search", get(api::music::search))
        .route("/player/:id", get(api::music::player))
        .route("/stream/:id", get(api::music::stream));

    let protected_routes = Router::new()
        .route("/playlist.create", post(api::playlists::create))
        .route("/playlist.readById", get(api::playlists::read_by_id))
        .route("/playlist.readByUserId", get(api::playlists::read_by_user_id))
        .route("/playlist.update", post(api::playlists::update))
        .route("/playlist.delete", post(api::playlists::delete))
        .route("/playlist.addSong", post(api::playlists::add_song))
        .route("/playlist.removeSong", post(api::playlists::remove_song))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.auth_service),
            middleware::auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .fallback(api::shell::serve)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
