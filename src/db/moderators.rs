use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Moderator, ModeratorProfile};

pub async fn find_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<Moderator>, sqlx::Error> {
    sqlx::query_as::<_, Moderator>(
        "SELECT moderator_id, username, password_hash, role, is_active, last_login
         FROM moderators WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn find_active_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<ModeratorProfile>, sqlx::Error> {
    sqlx::query_as::<_, ModeratorProfile>(
        "SELECT moderator_id, username, role, is_active, last_login
         FROM moderators WHERE moderator_id = $1 AND is_active = TRUE",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn update_last_login(
    pool: &PgPool,
    id: Uuid,
    at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE moderators SET last_login = $2 WHERE moderator_id = $1")
        .bind(id)
        .bind(at)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn list(pool: &PgPool) -> Result<Vec<ModeratorProfile>, sqlx::Error> {
    sqlx::query_as::<_, ModeratorProfile>(
        "SELECT moderator_id, username, role, is_active, last_login
         FROM moderators ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}
