//! Client for the remote domain dataset.

use async_trait::async_trait;

use crate::domain::entities::DomainEntry;
use crate::domain::providers::{DomainListProvider, ProviderError};

/// Default location of the top-sites dataset.
pub const DEFAULT_DOMAIN_LIST_URL: &str =
    "https://raw.githubusercontent.com/Kikobeats/top-sites/master/top-sites.json";

/// Fetches the domain dataset with a plain HTTP GET.
///
/// The dataset is downloaded on every call; nothing is cached.
pub struct TopSitesClient {
    client: reqwest::Client,
    url: String,
}

impl TopSitesClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DomainListProvider for TopSitesClient {
    async fn fetch_domains(&self) -> Result<Vec<DomainEntry>, ProviderError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::error!(error = %e, url = %self.url, "Domain list request failed");
                ProviderError::transport(e.to_string())
            })?;

        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, url = %self.url, "Failed to read domain list body");
            ProviderError::transport(e.to_string())
        })?;

        let entries: Vec<DomainEntry> = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(error = %e, url = %self.url, "Failed to decode domain list");
            ProviderError::decode(e.to_string())
        })?;

        tracing::debug!(count = entries.len(), "Fetched domain list");

        Ok(entries)
    }
}
