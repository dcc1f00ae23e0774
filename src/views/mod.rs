pub mod auth;
pub mod dashboard;
pub mod layout;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SharedState;

/// Sign-in pages. These answer 401 themselves and are not redirected.
pub fn auth_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(auth::root))
        .route("/auth/login", get(auth::login_page).post(auth::login_submit))
        .route("/auth/logout", post(auth::logout))
}

/// Pages that need a signed-in moderator.
pub fn dashboard_routes() -> Router<SharedState> {
    Router::new()
        .route("/dashboard", get(dashboard::index))
        .route("/dashboard/analytics", get(dashboard::analytics))
        .route("/dashboard/users", get(dashboard::users))
        .route("/dashboard/items", get(dashboard::items))
        .route("/dashboard/requests", get(dashboard::requests))
        .route("/dashboard/bookings", get(dashboard::bookings))
        .route("/dashboard/merchants", get(dashboard::merchants))
        .route("/dashboard/moderators", get(dashboard::moderators))
}
