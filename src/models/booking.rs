use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A `bookings` row joined through its rental request to the item and borrower.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct BookingListing {
    pub booking_id: Uuid,
    pub status: String,
    pub confirmed_at: DateTime<Utc>,
    pub start_time: DateTime<Utc>,
    pub return_time: DateTime<Utc>,
    pub pickup_location: Option<String>,
    pub item_title: Option<String>,
    pub borrower_first_name: Option<String>,
    pub borrower_last_name: Option<String>,
    pub borrower_email: Option<String>,
}
