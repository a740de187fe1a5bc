//! Browser-facing admin page.
//!
//! Server-rendered with Askama. The page itself is a settings form plus a
//! domain table that its script loads through the `POST /admin/domains`
//! action.
//!
//! # Modules
//!
//! - [`handlers`] - Page, form and action handlers
//! - [`middleware`] - Cookie authentication
//! - [`routes`] - `/admin` route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
