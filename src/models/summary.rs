use serde::Serialize;

/// Headline numbers for the analytics page.
#[derive(Debug, Clone, Default, sqlx::FromRow, Serialize)]
pub struct DashboardSummary {
    pub total_users: i64,
    pub pending_items: i64,
    pub pending_requests: i64,
    pub active_bookings: i64,
}
