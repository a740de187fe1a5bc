//! PostgreSQL repository implementations.
//!
//! # Repositories
//!
//! - [`PgSettingsRepository`] - Named settings (the API key)
//! - [`PgTokenRepository`] - Admin token storage and validation

pub mod pg_settings_repository;
pub mod pg_token_repository;

pub use pg_settings_repository::PgSettingsRepository;
pub use pg_token_repository::PgTokenRepository;
