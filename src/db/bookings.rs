use sqlx::PgPool;

use crate::models::BookingListing;

pub async fn list(pool: &PgPool) -> Result<Vec<BookingListing>, sqlx::Error> {
    sqlx::query_as::<_, BookingListing>(
        "SELECT bk.booking_id, bk.status, bk.confirmed_at, bk.start_time, bk.return_time,
                bk.pickup_location,
                i.title AS item_title,
                b.first_name AS borrower_first_name,
                b.last_name AS borrower_last_name,
                b.email AS borrower_email
         FROM bookings bk
         LEFT JOIN rental_requests r ON r.request_id = bk.request_id
         LEFT JOIN items i ON i.item_id = r.item_id
         LEFT JOIN users b ON b.user_id = r.borrower_id
         ORDER BY bk.confirmed_at DESC",
    )
    .fetch_all(pool)
    .await
}
