use sqlx::PgPool;

use crate::models::User;

pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT user_id, email, phone_number, first_name, last_name, address, profile_photo,
                location_enabled, vacation_mode, created_at
         FROM users ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}
