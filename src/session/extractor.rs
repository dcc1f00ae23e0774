use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::error::AppError;
use crate::models::{Capability, ModeratorProfile};
use crate::session::AuthState;
use crate::state::SharedState;

/// The moderator behind the request's session cookie, re-validated against
/// the store.
#[derive(Debug, Clone)]
pub struct CurrentModerator(pub ModeratorProfile);

impl CurrentModerator {
    pub fn require(&self, capability: Capability) -> Result<(), AppError> {
        if self.0.can(capability) {
            Ok(())
        } else {
            Err(AppError::Forbidden("Admin access required".to_string()))
        }
    }
}

impl FromRequestParts<SharedState> for CurrentModerator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let mut provider = state.session(jar);

        match provider.restore().await {
            AuthState::Authenticated(moderator) => Ok(CurrentModerator(moderator.clone())),
            _ => Err(AppError::Unauthorized("Not signed in".to_string())),
        }
    }
}
