/// API route modules
pub mod auth;
pub mod health;
pub mod music;
pub mod playlists;
pub mod shell;
