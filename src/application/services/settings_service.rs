//! API key settings service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::API_KEY_SETTING;
use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;
use crate::utils::sanitize::sanitize_text_field;

/// Maximum length of a stored API key, in characters.
pub const MAX_API_KEY_LEN: usize = 255;

/// Reads and updates the OpenPageRank API key.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    /// Returns the stored API key, or an empty string when none is set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn api_key(&self) -> Result<String, AppError> {
        Ok(self
            .repository
            .get(API_KEY_SETTING)
            .await?
            .map(|setting| setting.value)
            .unwrap_or_default())
    }

    /// Sanitizes and stores a new API key, returning the stored value.
    ///
    /// An empty value clears the key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the sanitized key is too long.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_api_key(&self, raw: &str) -> Result<String, AppError> {
        let api_key = sanitize_text_field(raw);

        if api_key.chars().count() > MAX_API_KEY_LEN {
            return Err(AppError::bad_request(
                "API key is too long",
                json!({"max": MAX_API_KEY_LEN}),
            ));
        }

        let setting = self.repository.upsert(API_KEY_SETTING, &api_key).await?;
        tracing::info!(updated_at = %setting.updated_at, "PageRank API key updated");

        Ok(setting.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Setting;
    use crate::domain::repositories::MockSettingsRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_api_key_returns_stored_value() {
        let mut mock_repo = MockSettingsRepository::new();

        mock_repo
            .expect_get()
            .withf(|name| name == API_KEY_SETTING)
            .times(1)
            .returning(|name| Ok(Some(Setting::new(name, "secret-key", Utc::now()))));

        let service = SettingsService::new(Arc::new(mock_repo));

        assert_eq!(service.api_key().await.unwrap(), "secret-key");
    }

    #[tokio::test]
    async fn test_api_key_defaults_to_empty() {
        let mut mock_repo = MockSettingsRepository::new();

        mock_repo.expect_get().times(1).returning(|_| Ok(None));

        let service = SettingsService::new(Arc::new(mock_repo));

        assert_eq!(service.api_key().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_update_api_key_sanitizes_before_storing() {
        let mut mock_repo = MockSettingsRepository::new();

        mock_repo
            .expect_upsert()
            .withf(|name, value| name == API_KEY_SETTING && value == "abc def")
            .times(1)
            .returning(|name, value| Ok(Setting::new(name, value, Utc::now())));

        let service = SettingsService::new(Arc::new(mock_repo));

        let stored = service.update_api_key("  <b>abc</b>\n\tdef ").await.unwrap();
        assert_eq!(stored, "abc def");
    }

    #[tokio::test]
    async fn test_update_api_key_rejects_oversized_value() {
        let mock_repo = MockSettingsRepository::new();
        let service = SettingsService::new(Arc::new(mock_repo));

        let result = service.update_api_key(&"k".repeat(MAX_API_KEY_LEN + 1)).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_api_key_propagates_database_error() {
        let mut mock_repo = MockSettingsRepository::new();

        mock_repo
            .expect_upsert()
            .times(1)
            .returning(|_, _| Err(AppError::internal("Database error", json!({}))));

        let service = SettingsService::new(Arc::new(mock_repo));

        let result = service.update_api_key("key").await;
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
