//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::domain_page_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET /domains` - Ranked domain page (`page`, `search` query parameters)
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/domains", get(domain_page_handler))
}
