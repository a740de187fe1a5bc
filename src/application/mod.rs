//! Application layer services implementing business logic.
//!
//! Services consume repository and provider traits and expose the operations
//! HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::ranking_service::RankingService`] - Fetch, filter, paginate and rank domains
//! - [`services::settings_service::SettingsService`] - API key storage
//! - [`services::auth_service::AuthService`] - Admin token authentication

pub mod services;
