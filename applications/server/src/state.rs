/// Shared application state
use crate::services::{AuthService, ShellCache};
use delta_core::MusicService;
use delta_storage::Database;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub auth_service: Arc<AuthService>,
    pub music: Arc<dyn MusicService>,
    pub shell: Arc<ShellCache>,
    /// Results per search when the client sends no `lim`
    pub search_limit: u32,
}

impl AppState {
    pub fn new(
        db: Arc<Database>,
        auth_service: Arc<AuthService>,
        music: Arc<dyn MusicService>,
        shell: Arc<ShellCache>,
        search_limit: u32,
    ) -> Self {
        Self {
            db,
            auth_service,
            music,
            shell,
            search_limit,
        }
    }
}
