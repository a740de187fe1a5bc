//! Persisted configuration values.

use chrono::{DateTime, Utc};

/// Setting name under which the OpenPageRank API key is stored.
pub const API_KEY_SETTING: &str = "dlp_api_key";

/// A named configuration value stored in the `settings` table.
#[derive(Debug, Clone)]
pub struct Setting {
    pub name: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl Setting {
    pub fn new(name: impl Into<String>, value: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            updated_at,
        }
    }
}
