use sqlx::PgPool;

use crate::models::MerchantListing;

pub async fn list(pool: &PgPool) -> Result<Vec<MerchantListing>, sqlx::Error> {
    sqlx::query_as::<_, MerchantListing>(
        "SELECT m.merchant_id, m.business_name, m.business_license, m.verified_status, m.created_at,
                u.first_name AS owner_first_name,
                u.last_name AS owner_last_name,
                u.email AS owner_email
         FROM merchants m
         LEFT JOIN users u ON u.user_id = m.user_id
         ORDER BY m.created_at DESC",
    )
    .fetch_all(pool)
    .await
}
