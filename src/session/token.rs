use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::ModeratorProfile;

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    #[serde(flatten)]
    moderator: ModeratorProfile,
    exp: i64,
}

/// Signs and verifies the cached session blob.
#[derive(Clone)]
pub struct SessionCodec {
    secret: String,
    ttl: Duration,
}

impl SessionCodec {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    pub fn encode(&self, moderator: &ModeratorProfile) -> Result<String, String> {
        let claims = SessionClaims {
            moderator: moderator.clone(),
            exp: (Utc::now() + self.ttl).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| format!("Session encode failed: {e}"))
    }

    pub fn decode(&self, blob: &str) -> Result<ModeratorProfile, String> {
        decode::<SessionClaims>(
            blob,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims.moderator)
        .map_err(|e| format!("Session decode failed: {e}"))
    }
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
