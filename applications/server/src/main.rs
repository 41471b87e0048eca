/// Delta Music Server
use anyhow::Context;
use clap::{Parser, Subcommand};
use delta_music_client::{MusicServiceClient, ServiceConfig};
use delta_server::{create_router, AppState, AuthService, ServerConfig, ShellCache};
use delta_storage::Database;
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "delta-server")]
#[command(about = "Delta Music playlist and streaming server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "DELTA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user with login credentials
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delta_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::AddUser { username, password } => add_user(&config, &username, &password).await?,
        Commands::ListUsers => list_users(&config).await?,
    }

    Ok(())
}

async fn open_database(config: &ServerConfig) -> anyhow::Result<Database> {
    ensure_parent_dir(&config.storage.database_url)?;
    Database::open(&config.storage.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.storage.database_url))
}

/// Create the directory holding a file-backed SQLite database
fn ensure_parent_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = database_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    if path.starts_with(':') {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting Delta Music server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let db = Arc::new(open_database(&config).await?);
    tracing::info!("Database connected");

    let auth_service = Arc::new(AuthService::new(
        &config.auth.jwt_secret,
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    ));

    let music = MusicServiceClient::new(
        ServiceConfig::new(config.music.service_url.clone())
            .with_timeout(Duration::from_secs(config.music.timeout_secs)),
    )?;
    tracing::info!("Music service: {}", music.base_url());

    let shell = Arc::new(ShellCache::install(config.web.dir.clone(), &config.web.shell_assets).await);

    let app_state = AppState::new(
        db,
        auth_service,
        Arc::new(music),
        shell,
        config.music.search_limit,
    );
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

async fn add_user(config: &ServerConfig, username: &str, password: &str) -> anyhow::Result<()> {
    let username = username.trim();
    anyhow::ensure!(!username.is_empty(), "Username cannot be empty");
    anyhow::ensure!(password.len() >= 8, "Password must be at least 8 characters");

    let db = open_database(config).await?;

    // Hashing needs no secret; only token signing does
    let auth_service = AuthService::new(
        &config.auth.jwt_secret,
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    );
    let password_hash = auth_service.hash_password(password)?;

    let user = db.create_user(username).await?;
    db.set_password_hash(&user.id, &password_hash).await?;

    tracing::info!(user_id = %user.id, "User created");
    println!("Created user {} ({})", user.name, user.id);

    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let db = open_database(config).await?;
    let users = db.get_all_users().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id, user.name);
    }

    Ok(())
}
