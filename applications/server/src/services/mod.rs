/// Server services
pub mod auth;
pub mod shell_cache;

pub use auth::AuthService;
pub use shell_cache::ShellCache;
