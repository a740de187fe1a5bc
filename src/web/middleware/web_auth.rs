//! Cookie-based authentication middleware for the admin page.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;

/// Name of the cookie carrying the admin token.
pub const AUTH_COOKIE: &str = "auth_token";

/// Where unauthenticated browsers are sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// Authenticates admin requests using the `auth_token` cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: auth_token=<token>
/// ```
///
/// The token is validated the same way as API Bearer tokens. Unlike the API
/// middleware, which answers `401 Unauthorized`, this one redirects to
/// `/admin/login`.
///
/// # Errors
///
/// Returns `Redirect` to `/admin/login` if:
/// - `auth_token` cookie is missing
/// - Token validation fails (unknown or revoked)
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    match cookie_token(req.headers()) {
        Some(token) => match st.auth_service.authenticate(&token).await {
            Ok(()) => Ok(next.run(req).await),
            Err(_) => Err(Redirect::to(LOGIN_PATH)),
        },
        None => Err(Redirect::to(LOGIN_PATH)),
    }
}

/// Extracts the `auth_token` value, ignoring any other cookies.
fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(AUTH_COOKIE), Some(value)) if !value.is_empty() => Some(value.to_string()),
                _ => None,
            }
        })
}
