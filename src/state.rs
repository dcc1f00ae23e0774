use std::sync::Arc;

use axum_extra::extract::CookieJar;

use crate::auth::ModeratorDirectory;
use crate::config::Config;
use crate::db::Store;
use crate::session::{CookieCache, SessionCodec, SessionProvider};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// Privileged store, used for credential checks.
    pub service: Store,
    /// Browser-safe store, used for page queries and session checks.
    pub public: Store,
    pub config: Config,
    pub codec: SessionCodec,
    directory: Arc<dyn ModeratorDirectory>,
    credentials: Arc<dyn ModeratorDirectory>,
}

impl AppState {
    pub fn new(service: Store, public: Store, config: Config) -> Self {
        let codec = SessionCodec::new(
            config.session_secret.clone(),
            chrono::Duration::hours(config.session_ttl_hours),
        );
        Self {
            directory: Arc::new(public.clone()),
            credentials: Arc::new(service.clone()),
            service,
            public,
            config,
            codec,
        }
    }

    pub fn credentials(&self) -> &dyn ModeratorDirectory {
        self.credentials.as_ref()
    }

    /// A session provider over the request's cookies, still in `Loading`.
    pub fn session(&self, jar: CookieJar) -> SessionProvider<CookieCache> {
        let cache = CookieCache::new(
            jar,
            self.config.secure_cookies,
            time::Duration::hours(self.config.session_ttl_hours),
        );
        SessionProvider::new(
            cache,
            self.codec.clone(),
            Arc::clone(&self.directory),
            Arc::clone(&self.credentials),
        )
    }
}
