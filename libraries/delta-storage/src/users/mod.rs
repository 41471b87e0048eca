//! User management and authentication queries

use crate::rows::{now_millis, timestamp};
use delta_core::{
    error::Result,
    types::{User, UserId},
    DeltaError,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn user_from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        created_at: timestamp(row, "created_at")?,
    })
}

/// Create a new user
///
/// Fails with `InvalidInput` if the name is already taken.
pub async fn create(pool: &SqlitePool, name: &str) -> Result<User> {
    if find_by_name(pool, name).await?.is_some() {
        return Err(DeltaError::invalid_input(format!(
            "user {name} already exists"
        )));
    }

    let user = User::new(name);

    sqlx::query("INSERT INTO users (id, name, created_at) VALUES (?, ?, ?)")
        .bind(&user.id)
        .bind(&user.name)
        .bind(user.created_at.timestamp_millis())
        .execute(pool)
        .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Find user by login name
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, created_at FROM users WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Get all users
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, name, created_at FROM users ORDER BY name")
        .fetch_all(pool)
        .await?;

    rows.iter().map(user_from_row).collect()
}

/// Get user's password hash for authentication
///
/// Returns `None` if the user has no credentials.
pub async fn get_password_hash(pool: &SqlitePool, user_id: &UserId) -> Result<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM user_credentials WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("password_hash")))
}

/// Create or update user credentials
///
/// `password_hash` must already be hashed (bcrypt).
pub async fn set_password_hash(
    pool: &SqlitePool,
    user_id: &UserId,
    password_hash: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO user_credentials (user_id, password_hash, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(user_id)
         DO UPDATE SET password_hash = excluded.password_hash, updated_at = excluded.updated_at",
    )
    .bind(user_id)
    .bind(password_hash)
    .bind(now_millis())
    .execute(pool)
    .await?;

    Ok(())
}
