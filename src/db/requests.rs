use sqlx::PgPool;

use crate::models::RequestListing;

pub async fn list(pool: &PgPool) -> Result<Vec<RequestListing>, sqlx::Error> {
    sqlx::query_as::<_, RequestListing>(
        "SELECT r.request_id, r.status, r.start_date, r.end_date, r.pickup_location, r.created_at,
                i.title AS item_title,
                b.first_name AS borrower_first_name,
                b.last_name AS borrower_last_name,
                b.email AS borrower_email,
                o.first_name AS owner_first_name,
                o.last_name AS owner_last_name,
                o.email AS owner_email
         FROM rental_requests r
         LEFT JOIN items i ON i.item_id = r.item_id
         LEFT JOIN users b ON b.user_id = r.borrower_id
         LEFT JOIN users o ON o.user_id = r.owner_id
         ORDER BY r.created_at DESC",
    )
    .fetch_all(pool)
    .await
}
