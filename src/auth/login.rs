use axum::http::StatusCode;

use crate::auth::directory::ModeratorDirectory;
use crate::auth::password;
use crate::models::ModeratorProfile;

/// Why a login attempt was refused. The `Display` text is what the client sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    MissingCredentials,
    /// Unknown username, lookup failure and wrong password all map here.
    InvalidCredentials,
    Disabled,
    Internal(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::MissingCredentials => f.write_str("Username and password are required"),
            LoginError::InvalidCredentials => f.write_str("Invalid username or password"),
            LoginError::Disabled => f.write_str("Account is disabled"),
            LoginError::Internal(_) => f.write_str("Internal server error"),
        }
    }
}

impl std::error::Error for LoginError {}

impl LoginError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LoginError::MissingCredentials => StatusCode::BAD_REQUEST,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LoginError::Disabled => StatusCode::FORBIDDEN,
            LoginError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Check a username/password pair against the moderators table and return
/// the moderator's public fields.
pub async fn authenticate<D>(
    directory: &D,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<ModeratorProfile, LoginError>
where
    D: ModeratorDirectory + ?Sized,
{
    let (username, password) = match (username, password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => return Err(LoginError::MissingCredentials),
    };

    let moderator = match directory.find_by_username(username).await {
        Ok(Some(m)) => m,
        Ok(None) => {
            tracing::info!(username, "Login refused: unknown username");
            return Err(LoginError::InvalidCredentials);
        }
        Err(e) => {
            tracing::warn!(username, "Login refused: moderator lookup failed: {e}");
            return Err(LoginError::InvalidCredentials);
        }
    };

    if !moderator.is_active {
        tracing::info!(username, "Login refused: account is disabled");
        return Err(LoginError::Disabled);
    }

    let candidate = password.to_string();
    let stored = moderator.password_hash.clone();
    let verified = tokio::task::spawn_blocking(move || password::verify(&candidate, &stored))
        .await
        .map_err(|e| LoginError::Internal(format!("Password check panicked: {e}")))?;

    match verified {
        Ok(true) => {}
        Ok(false) => {
            tracing::info!(username, "Login refused: wrong password");
            return Err(LoginError::InvalidCredentials);
        }
        Err(e) => {
            tracing::warn!(username, "Login refused: stored hash unusable: {e}");
            return Err(LoginError::InvalidCredentials);
        }
    }

    tracing::info!(username, role = %moderator.role, "Login succeeded");
    Ok(moderator.into_profile())
}
