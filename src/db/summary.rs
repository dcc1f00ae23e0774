use sqlx::PgPool;

use crate::models::DashboardSummary;

pub async fn fetch(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
    sqlx::query_as::<_, DashboardSummary>(
        "SELECT
            (SELECT COUNT(*) FROM users) AS total_users,
            (SELECT COUNT(*) FROM items WHERE status IN ('PENDING', 'UNDER_REVIEW')) AS pending_items,
            (SELECT COUNT(*) FROM rental_requests WHERE status = 'PENDING') AS pending_requests,
            (SELECT COUNT(*) FROM bookings WHERE status = 'IN_PROGRESS') AS active_bookings",
    )
    .fetch_one(pool)
    .await
}
