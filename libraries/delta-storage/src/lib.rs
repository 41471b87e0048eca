//! Delta Music Storage
//!
//! `SQLite` persistence for users, playlists and the songs inside them.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each feature (`users`, `playlists`, `songs`) owns its queries
//! - **Owner scoping**: playlist updates and deletes match on id *and* owner
//! - **Protection gating**: song mutations check the playlist's protection mode
//! - **Cascades**: deleting a playlist deletes its songs (foreign keys are on)
//!
//! # Example
//!
//! ```rust,no_run
//! use delta_storage::Database;
//! use delta_core::types::{CreatePlaylist, ProtectionMode};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::open("sqlite://delta.db").await?;
//!
//! let user = db.create_user("alice").await?;
//! let playlist = db
//!     .create_playlist(CreatePlaylist {
//!         name: "Road trip".to_string(),
//!         description: None,
//!         user_id: user.id.clone(),
//!         protection: ProtectionMode::PublicUnlocked,
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod rows;

// Vertical slices
pub mod playlists;
pub mod songs;
pub mod users;

pub use context::Database;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://delta.db`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::debug!("SQLite pool created");

    Ok(pool)
}
