use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An `items` row joined with its owner and category.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ItemListing {
    pub item_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub average_rating: f64,
    pub total_reviews: i32,
    pub created_at: DateTime<Utc>,
    pub owner_first_name: Option<String>,
    pub owner_last_name: Option<String>,
    pub owner_email: Option<String>,
    pub category_name: Option<String>,
}
