//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the persistence the service needs. Concrete
//! implementations live in `crate::infrastructure::persistence`; mocks are
//! generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`SettingsRepository`] - Named configuration values (the API key)
//! - [`TokenRepository`] - Admin access tokens

pub mod settings_repository;
pub mod token_repository;

pub use settings_repository::SettingsRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
