//! Repository trait for admin token authentication.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Admin access token with metadata.
///
/// Only the HMAC-SHA256 hash of a token is stored.
#[derive(Debug, Clone)]
pub struct ApiToken {
    pub id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Storage for admin token hashes.
///
/// Raw tokens never reach this trait: [`crate::application::services::AuthService`]
/// hashes them first. Implemented by
/// [`crate::infrastructure::persistence::PgTokenRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Whether `token_hash` belongs to an unrevoked token.
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Stamps `last_used_at` on the unrevoked token with this hash.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;

    /// Stores a new token. A hash that already exists is an error.
    async fn create_token(&self, name: &str, token_hash: &str) -> Result<ApiToken, AppError>;

    /// All tokens, revoked ones included, newest first.
    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ApiToken>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError>;

    /// Sets `revoked_at`. Revoking twice keeps the first timestamp.
    async fn revoke_token(&self, id: i64) -> Result<(), AppError>;
}
