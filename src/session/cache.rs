use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the cookie holding the cached session blob.
pub const SESSION_COOKIE: &str = "krii_session";

/// Where the provider persists its session blob between page loads.
pub trait SessionCache {
    fn load(&self) -> Option<String>;
    fn save(&mut self, blob: String);
    fn clear(&mut self);
}

/// Process-local cache, for tests and tools.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    blob: Option<String>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }
}

impl SessionCache for MemoryCache {
    fn load(&self) -> Option<String> {
        self.blob.clone()
    }

    fn save(&mut self, blob: String) {
        self.blob = Some(blob);
    }

    fn clear(&mut self) {
        self.blob = None;
    }
}

/// Keeps the blob in the browser's `krii_session` cookie.
#[derive(Debug, Clone)]
pub struct CookieCache {
    jar: CookieJar,
    secure: bool,
    max_age: time::Duration,
}

impl CookieCache {
    pub fn new(jar: CookieJar, secure: bool, max_age: time::Duration) -> Self {
        Self {
            jar,
            secure,
            max_age,
        }
    }

    /// The jar to return with the response, carrying any set/removal cookie.
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl SessionCache for CookieCache {
    fn load(&self) -> Option<String> {
        self.jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
    }

    fn save(&mut self, blob: String) {
        let cookie = Cookie::build((SESSION_COOKIE, blob))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(self.max_age)
            .build();
        self.jar = self.jar.clone().add(cookie);
    }

    fn clear(&mut self) {
        self.jar = self
            .jar
            .clone()
            .remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    }
}

/// A jar that only expires the session cookie.
pub fn clear_session_cookie() -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    CookieJar::new().add(cookie)
}
