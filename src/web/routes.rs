//! Admin page route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::middleware::rate_limit;
use crate::state::AppState;
use crate::web::handlers::{
    admin_page_handler, fetch_domains_handler, login_page_handler, login_submit_handler,
    logout_handler, save_settings_handler,
};

/// Admin routes requiring the `auth_token` cookie.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET /` - Admin page with the settings form and domain table
/// - `POST /settings` - Save the API key
/// - `POST /domains` - Domain table fragment (rate limited)
/// - `POST /logout` - Clear the auth cookie
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_page_handler))
        .route("/settings", post(save_settings_handler))
        .route(
            "/domains",
            post(fetch_domains_handler).layer(rate_limit::upstream_layer()),
        )
        .route("/logout", post(logout_handler))
}

/// Public admin routes.
///
/// # Endpoints
///
/// - `GET /login` - Login form
/// - `POST /login` - Exchange a token for the auth cookie (rate limited)
pub fn public_routes() -> Router<AppState> {
    Router::new().route(
        "/login",
        get(login_page_handler).merge(post(login_submit_handler).layer(rate_limit::login_layer())),
    )
}
