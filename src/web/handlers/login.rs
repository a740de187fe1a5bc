//! Login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::state::AppState;
use crate::web::middleware::web_auth::{AUTH_COOKIE, LOGIN_PATH};

/// Template for the login page.
#[derive(Template, WebTemplate, Default)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub token: String,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /admin/login`
pub async fn login_page_handler() -> LoginTemplate {
    LoginTemplate::default()
}

/// Exchanges an admin token for the `auth_token` cookie.
///
/// # Endpoint
///
/// `POST /admin/login` (form field `token`)
///
/// A valid token sets the cookie and redirects to `/admin`. An invalid one
/// re-renders the form with `401 Unauthorized`.
pub async fn login_submit_handler(
    State(st): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Response {
    let token = form.token.trim();

    if token.is_empty() || st.auth_service.authenticate(token).await.is_err() {
        tracing::warn!("Rejected admin login");
        let page = LoginTemplate {
            error: Some("Invalid token".to_string()),
        };
        return (StatusCode::UNAUTHORIZED, page).into_response();
    }

    let cookie = format!("{AUTH_COOKIE}={token}; Path=/admin; HttpOnly; SameSite=Strict");
    ([(SET_COOKIE, cookie)], Redirect::to("/admin")).into_response()
}

/// Clears the `auth_token` cookie.
///
/// # Endpoint
///
/// `POST /admin/logout`
pub async fn logout_handler() -> Response {
    let cookie = format!("{AUTH_COOKIE}=; Path=/admin; Max-Age=0; HttpOnly; SameSite=Strict");
    ([(SET_COOKIE, cookie)], Redirect::to(LOGIN_PATH)).into_response()
}
