use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::auth::authenticate;
use crate::error::AppError;
use crate::models::ModeratorProfile;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub moderator: ModeratorProfile,
}

pub async fn login(
    State(state): State<SharedState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!("Rejected login body: {e}");
        AppError::BadRequest("Invalid request body".to_string())
    })?;

    let moderator = authenticate(
        state.credentials(),
        req.username.as_deref(),
        req.password.as_deref(),
    )
    .await?;

    Ok(Json(LoginResponse {
        success: true,
        moderator,
    }))
}
