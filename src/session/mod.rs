//! Signed-in state for one browser profile.
//!
//! A [`SessionProvider`] starts in [`AuthState::Loading`], and `restore`
//! resolves it against the cached blob and the moderators table. Nothing
//! behind the provider is rendered until that check completes.

pub mod cache;
pub mod extractor;
pub mod token;

use std::sync::Arc;

use chrono::Utc;

use crate::auth::{LoginError, ModeratorDirectory, authenticate};
use crate::models::ModeratorProfile;

pub use cache::{CookieCache, MemoryCache, SESSION_COOKIE, SessionCache};
pub use extractor::CurrentModerator;
pub use token::SessionCodec;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Loading,
    Authenticated(ModeratorProfile),
    Unauthenticated,
}

pub struct SessionProvider<C> {
    cache: C,
    codec: SessionCodec,
    /// Revalidation and last-login updates.
    directory: Arc<dyn ModeratorDirectory>,
    /// Credential checks; needs to see password hashes.
    credentials: Arc<dyn ModeratorDirectory>,
    state: AuthState,
}

impl<C: SessionCache> SessionProvider<C> {
    pub fn new(
        cache: C,
        codec: SessionCodec,
        directory: Arc<dyn ModeratorDirectory>,
        credentials: Arc<dyn ModeratorDirectory>,
    ) -> Self {
        Self {
            cache,
            codec,
            directory,
            credentials,
            state: AuthState::Loading,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn moderator(&self) -> Option<&ModeratorProfile> {
        match &self.state {
            AuthState::Authenticated(m) => Some(m),
            _ => None,
        }
    }

    /// False until the initial `restore` has finished.
    pub fn is_ready(&self) -> bool {
        !matches!(self.state, AuthState::Loading)
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn into_cache(self) -> C {
        self.cache
    }

    /// Re-validate the cached session against the store. Any failure clears
    /// the cache and leaves the provider unauthenticated.
    pub async fn restore(&mut self) -> &AuthState {
        let Some(blob) = self.cache.load() else {
            tracing::debug!("No cached session");
            self.state = AuthState::Unauthenticated;
            return &self.state;
        };

        self.state = match self.revalidate(&blob).await {
            Ok(moderator) => {
                tracing::debug!(username = %moderator.username, "Session restored");
                AuthState::Authenticated(moderator)
            }
            Err(reason) => {
                tracing::info!("Discarding cached session: {reason}");
                self.cache.clear();
                AuthState::Unauthenticated
            }
        };
        &self.state
    }

    async fn revalidate(&self, blob: &str) -> Result<ModeratorProfile, String> {
        let cached = self.codec.decode(blob)?;
        match self.directory.find_active(cached.moderator_id).await {
            Ok(Some(moderator)) => Ok(moderator),
            Ok(None) => Err(format!(
                "moderator {} is missing or disabled",
                cached.moderator_id
            )),
            Err(e) => Err(format!("lookup failed: {e}")),
        }
    }

    /// Check credentials, cache the sanitized moderator and mark it signed in.
    /// The last-login timestamp is updated in the background.
    pub async fn sign_in(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<ModeratorProfile, LoginError> {
        let result = authenticate(self.credentials.as_ref(), Some(username), Some(password))
            .await
            .and_then(|moderator| {
                let blob = self.codec.encode(&moderator).map_err(LoginError::Internal)?;
                Ok((moderator, blob))
            });
        let (moderator, blob) = match result {
            Ok(signed) => signed,
            Err(e) => {
                // A failed attempt settles a provider that was never restored.
                if self.state == AuthState::Loading {
                    self.state = AuthState::Unauthenticated;
                }
                return Err(e);
            }
        };

        self.cache.save(blob);
        self.state = AuthState::Authenticated(moderator.clone());

        let directory = Arc::clone(&self.directory);
        let id = moderator.moderator_id;
        tokio::spawn(async move {
            if let Err(e) = directory.record_login(id, Utc::now()).await {
                tracing::warn!(%id, "Failed to record last login: {e}");
            }
        });

        Ok(moderator)
    }

    pub fn logout(&mut self) {
        self.cache.clear();
        self.state = AuthState::Unauthenticated;
    }
}
