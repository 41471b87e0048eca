/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,

    #[serde(default = "default_music")]
    pub music: MusicSettings,

    #[serde(default = "default_web")]
    pub web: WebSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_jwt_expiration_hours")]
    pub jwt_expiration_hours: u64,

    #[serde(default = "default_jwt_refresh_expiration_days")]
    pub jwt_refresh_expiration_days: u64,
}

/// Remote catalogue microservice
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MusicSettings {
    #[serde(default = "default_service_url")]
    pub service_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Results per search when the client does not pass `lim`
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,
}

/// Static web shell
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebSettings {
    #[serde(default = "default_web_dir")]
    pub dir: PathBuf,

    /// Asset paths cached in memory at startup
    #[serde(default = "default_shell_assets")]
    pub shell_assets: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` (or `config.toml` in the working directory when present),
    /// then applies `DELTA_<SECTION>__<KEY>` environment overrides, e.g.
    /// `DELTA_AUTH__JWT_SECRET`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("DELTA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set DELTA_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        let url = self.music.service_url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ServerError::Config(format!(
                "Music service URL must start with http:// or https:// (got {:?})",
                self.music.service_url
            )));
        }

        if self.music.search_limit == 0 {
            return Err(ServerError::Config(
                "music.search_limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/delta.db".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        jwt_expiration_hours: default_jwt_expiration_hours(),
        jwt_refresh_expiration_days: default_jwt_refresh_expiration_days(),
    }
}

fn default_jwt_expiration_hours() -> u64 {
    24
}

fn default_jwt_refresh_expiration_days() -> u64 {
    30
}

fn default_music() -> MusicSettings {
    MusicSettings {
        service_url: default_service_url(),
        timeout_secs: default_timeout_secs(),
        search_limit: default_search_limit(),
    }
}

fn default_service_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_search_limit() -> u32 {
    delta_music_client::DEFAULT_SEARCH_LIMIT
}

fn default_web() -> WebSettings {
    WebSettings {
        dir: default_web_dir(),
        shell_assets: default_shell_assets(),
    }
}

fn default_web_dir() -> PathBuf {
    PathBuf::from("./web")
}

fn default_shell_assets() -> Vec<String> {
    vec!["/".to_string(), "/manifest.json".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
            music: default_music(),
            web: default_web(),
        }
    }
}
