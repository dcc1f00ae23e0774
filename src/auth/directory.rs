use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::{self, Store};
use crate::models::{Moderator, ModeratorProfile};

/// The moderator lookups the login flow and the session provider need.
#[async_trait]
pub trait ModeratorDirectory: Send + Sync {
    /// Exact-match lookup, including the password hash.
    async fn find_by_username(&self, username: &str) -> Result<Option<Moderator>, sqlx::Error>;

    /// Lookup that only returns moderators whose account is active.
    async fn find_active(&self, id: Uuid) -> Result<Option<ModeratorProfile>, sqlx::Error>;

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl ModeratorDirectory for Store {
    async fn find_by_username(&self, username: &str) -> Result<Option<Moderator>, sqlx::Error> {
        db::moderators::find_by_username(self.pool(), username).await
    }

    async fn find_active(&self, id: Uuid) -> Result<Option<ModeratorProfile>, sqlx::Error> {
        db::moderators::find_active_by_id(self.pool(), id).await
    }

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), sqlx::Error> {
        db::moderators::update_last_login(self.pool(), id, at).await
    }
}
