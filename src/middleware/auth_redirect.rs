use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::session::cache::clear_session_cookie;

/// Turns 401 page responses into a redirect to `/auth/login`, dropping
/// whatever session cookie failed to validate.
pub async fn redirect_unauthorized(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if response.status() == StatusCode::UNAUTHORIZED {
        (clear_session_cookie(), Redirect::to("/auth/login")).into_response()
    } else {
        response
    }
}
