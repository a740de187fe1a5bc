//! Client for the OpenPageRank lookup API.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::domain::entities::{PageRank, RankedDomain};
use crate::domain::providers::{PageRankProvider, ProviderError};

/// Default OpenPageRank endpoint.
pub const DEFAULT_PAGE_RANK_API_URL: &str = "https://openpagerank.com/api/v1.0/getPageRank";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "API-OPR";

/// OpenPageRank REST client.
///
/// One call ranks one batch: the domains go in the query string as
/// `domains[0]=…&domains[1]=…`, the key in the [`API_KEY_HEADER`] header.
///
/// # Response Format
///
/// ```json
/// {
///   "status_code": 200,
///   "response": [
///     { "status_code": 200, "domain": "google.com", "page_rank_integer": 10, "rank": "1" }
///   ]
/// }
/// ```
pub struct OpenPageRankClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OpenPageRankClient {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Builds the request URL for one batch.
    fn batch_url(&self, domains: &[String]) -> Result<Url, ProviderError> {
        let params = domains
            .iter()
            .enumerate()
            .map(|(i, domain)| (format!("domains[{i}]"), domain.as_str()));

        Url::parse_with_params(&self.endpoint, params).map_err(|e| {
            tracing::error!(error = %e, endpoint = %self.endpoint, "Invalid PageRank endpoint");
            ProviderError::transport(format!("invalid endpoint: {e}"))
        })
    }
}

/// Converts the `response` array of a rank API body into ranked domains.
///
/// Items that are not JSON objects are logged and skipped.
fn parse_rank_response(body: &Value) -> Result<Vec<RankedDomain>, ProviderError> {
    let items = body
        .get("response")
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::invalid_response("missing `response` array"))?;

    let ranked = items
        .iter()
        .filter_map(|item| match item.as_object() {
            Some(fields) => {
                let domain = fields
                    .get("domain")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let page_rank = PageRank::from_json(fields.get("page_rank_integer"));
                Some(RankedDomain::new(domain, page_rank))
            }
            None => {
                tracing::warn!(item = %item, "Skipping malformed PageRank item");
                None
            }
        })
        .collect();

    Ok(ranked)
}

#[async_trait]
impl PageRankProvider for OpenPageRankClient {
    async fn rank_batch(
        &self,
        api_key: &str,
        domains: &[String],
    ) -> Result<Vec<RankedDomain>, ProviderError> {
        let url = self.batch_url(domains)?;

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "PageRank request failed");
                ProviderError::transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, %status, "Failed to read PageRank body");
            ProviderError::transport(e.to_string())
        })?;

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, %status, "Failed to decode PageRank body");
            ProviderError::decode(e.to_string())
        })?;

        let ranked = parse_rank_response(&value).inspect_err(|e| {
            tracing::error!(error = %e, %status, "Unexpected PageRank response");
        })?;

        tracing::debug!(requested = domains.len(), ranked = ranked.len(), "Ranked batch");

        Ok(ranked)
    }
}
