use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::session::AuthState;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    username: String,
    error: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn root(State(state): State<SharedState>, jar: CookieJar) -> Response {
    let mut session = state.session(jar);
    let target = match session.restore().await {
        AuthState::Authenticated(_) => "/dashboard",
        _ => "/auth/login",
    };
    (session.into_cache().into_jar(), Redirect::to(target)).into_response()
}

pub async fn login_page(State(state): State<SharedState>, jar: CookieJar) -> Response {
    let mut session = state.session(jar);
    if let AuthState::Authenticated(_) = session.restore().await {
        return Redirect::to("/dashboard").into_response();
    }

    let template = LoginTemplate {
        username: String::new(),
        error: None,
    };
    (
        session.into_cache().into_jar(),
        Html(template.render().unwrap_or_default()),
    )
        .into_response()
}

pub async fn login_submit(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let mut session = state.session(jar);

    match session.sign_in(&form.username, &form.password).await {
        Ok(_) => (session.into_cache().into_jar(), Redirect::to("/dashboard")).into_response(),
        Err(e) => {
            let template = LoginTemplate {
                username: form.username,
                error: Some(e.to_string()),
            };
            (
                e.status_code(),
                session.into_cache().into_jar(),
                Html(template.render().unwrap_or_default()),
            )
                .into_response()
        }
    }
}

pub async fn logout(State(state): State<SharedState>, jar: CookieJar) -> Response {
    let mut session = state.session(jar);
    session.logout();
    (session.into_cache().into_jar(), Redirect::to("/auth/login")).into_response()
}
