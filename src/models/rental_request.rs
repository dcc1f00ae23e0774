use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A `rental_requests` row joined with its item, borrower and owner.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct RequestListing {
    pub request_id: Uuid,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub pickup_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub item_title: Option<String>,
    pub borrower_first_name: Option<String>,
    pub borrower_last_name: Option<String>,
    pub borrower_email: Option<String>,
    pub owner_first_name: Option<String>,
    pub owner_last_name: Option<String>,
    pub owner_email: Option<String>,
}
