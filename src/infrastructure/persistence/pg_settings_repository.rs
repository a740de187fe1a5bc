//! PostgreSQL implementation of the settings repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Setting;
use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `settings` table.
pub struct PgSettingsRepository {
    pool: Arc<PgPool>,
}

impl PgSettingsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SettingRow {
    name: String,
    value: String,
    updated_at: DateTime<Utc>,
}

impl From<SettingRow> for Setting {
    fn from(row: SettingRow) -> Self {
        Setting::new(row.name, row.value, row.updated_at)
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn get(&self, name: &str) -> Result<Option<Setting>, AppError> {
        let row = sqlx::query_as::<_, SettingRow>(
            r#"
            SELECT name, value, updated_at
            FROM settings
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Setting::from))
    }

    async fn upsert(&self, name: &str, value: &str) -> Result<Setting, AppError> {
        let row = sqlx::query_as::<_, SettingRow>(
            r#"
            INSERT INTO settings (name, value)
            VALUES ($1, $2)
            ON CONFLICT (name)
            DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            RETURNING name, value, updated_at
            "#,
        )
        .bind(name)
        .bind(value)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
