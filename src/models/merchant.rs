use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct MerchantListing {
    pub merchant_id: Uuid,
    pub business_name: String,
    pub business_license: Option<String>,
    pub verified_status: bool,
    pub created_at: DateTime<Utc>,
    pub owner_first_name: Option<String>,
    pub owner_last_name: Option<String>,
    pub owner_email: Option<String>,
}
