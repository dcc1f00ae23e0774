use sqlx::PgPool;

use crate::models::ItemListing;

pub async fn list(pool: &PgPool) -> Result<Vec<ItemListing>, sqlx::Error> {
    sqlx::query_as::<_, ItemListing>(
        "SELECT i.item_id, i.title, i.description, i.status, i.average_rating, i.total_reviews,
                i.created_at,
                o.first_name AS owner_first_name,
                o.last_name AS owner_last_name,
                o.email AS owner_email,
                c.name AS category_name
         FROM items i
         LEFT JOIN users o ON o.user_id = i.owner_id
         LEFT JOIN categories c ON c.category_id = i.category_id
         ORDER BY i.created_at DESC",
    )
    .fetch_all(pool)
    .await
}
