//! Repository trait for persisted settings.

use crate::domain::entities::Setting;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for named string settings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSettingsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Reads a setting by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self, name: &str) -> Result<Option<Setting>, AppError>;

    /// Inserts or replaces a setting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, name: &str, value: &str) -> Result<Setting, AppError>;
}
