//! Domain listing and PageRank annotation.

use serde_json::json;
use std::sync::Arc;

use crate::application::services::SettingsService;
use crate::domain::entities::{DomainPage, RankedDomain};
use crate::domain::listing::{PAGE_SIZE, filter_by_search, page_window, total_pages};
use crate::domain::providers::{
    DomainListProvider, PageRankProvider, ProviderError, RANK_BATCH_SIZE,
};
use crate::error::AppError;

/// Message shown when the domain dataset cannot be retrieved.
pub const DOMAIN_LIST_FETCH_ERROR: &str = "Failed to fetch JSON file.";

/// Message shown when any PageRank batch fails.
pub const PAGE_RANK_FETCH_ERROR: &str = "Failed to fetch PageRank data.";

/// Builds one page of ranked domains per request.
///
/// Every call downloads the dataset, filters and slices it, then ranks the
/// slice. Nothing is retained between calls.
pub struct RankingService {
    domain_list: Arc<dyn DomainListProvider>,
    page_rank: Arc<dyn PageRankProvider>,
    settings: Arc<SettingsService>,
}

impl RankingService {
    pub fn new(
        domain_list: Arc<dyn DomainListProvider>,
        page_rank: Arc<dyn PageRankProvider>,
        settings: Arc<SettingsService>,
    ) -> Self {
        Self {
            domain_list,
            page_rank,
            settings,
        }
    }

    /// Returns the 1-based `page` of domains matching `search`, with ranks.
    ///
    /// Pages outside the filtered list are empty and trigger no rank lookups.
    /// `total_pages` always reflects the whole filtered list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the dataset or any rank batch fails.
    /// Returns [`AppError::Internal`] if the API key cannot be read.
    pub async fn fetch_page(&self, page: i64, search: &str) -> Result<DomainPage, AppError> {
        let entries = self
            .domain_list
            .fetch_domains()
            .await
            .map_err(domain_list_error)?;

        let names = filter_by_search(entries, search);
        let total_domains = names.len();
        let rows = self.rank_domains(page_window(&names, page, PAGE_SIZE)).await?;

        tracing::debug!(
            page,
            search,
            total_domains,
            rows = rows.len(),
            "Built domain page"
        );

        Ok(DomainPage {
            rows,
            page,
            per_page: PAGE_SIZE,
            total_domains,
            total_pages: total_pages(total_domains, PAGE_SIZE),
        })
    }

    /// Ranks `domains` in sequential batches of [`RANK_BATCH_SIZE`].
    ///
    /// The first failing batch aborts the lookup; results of earlier batches
    /// are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if any batch fails.
    /// Returns [`AppError::Internal`] if the API key cannot be read.
    pub async fn rank_domains(&self, domains: &[String]) -> Result<Vec<RankedDomain>, AppError> {
        if domains.is_empty() {
            return Ok(Vec::new());
        }

        let api_key = self.settings.api_key().await?;
        if api_key.is_empty() {
            tracing::warn!("PageRank API key is not configured");
        }

        let mut ranked = Vec::with_capacity(domains.len());
        for (batch, chunk) in domains.chunks(RANK_BATCH_SIZE).enumerate() {
            let results = self
                .page_rank
                .rank_batch(&api_key, chunk)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, batch, size = chunk.len(), "PageRank batch failed");
                    AppError::upstream(PAGE_RANK_FETCH_ERROR, json!({"source": "page_rank"}))
                })?;
            ranked.extend(results);
        }

        Ok(ranked)
    }
}

fn domain_list_error(e: ProviderError) -> AppError {
    let message = match &e {
        ProviderError::Transport { .. } => DOMAIN_LIST_FETCH_ERROR.to_string(),
        ProviderError::Decode { message } | ProviderError::InvalidResponse { message } => {
            format!("Error decoding JSON: {message}")
        }
    };
    AppError::upstream(message, json!({"source": "domain_list"}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DomainEntry, PageRank, Setting};
    use crate::domain::providers::{MockDomainListProvider, MockPageRankProvider};
    use crate::domain::repositories::MockSettingsRepository;
    use chrono::Utc;
    use mockall::Sequence;

    fn settings_with_key(key: &'static str) -> Arc<SettingsService> {
        let mut repo = MockSettingsRepository::new();
        repo.expect_get()
            .returning(move |name| Ok(Some(Setting::new(name, key, Utc::now()))));
        Arc::new(SettingsService::new(Arc::new(repo)))
    }

    fn unused_settings() -> Arc<SettingsService> {
        Arc::new(SettingsService::new(Arc::new(MockSettingsRepository::new())))
    }

    fn dataset(names: &[&str]) -> MockDomainListProvider {
        let entries: Vec<DomainEntry> = names.iter().map(|n| DomainEntry::new(*n)).collect();
        let mut provider = MockDomainListProvider::new();
        provider
            .expect_fetch_domains()
            .times(1)
            .returning(move || Ok(entries.clone()));
        provider
    }

    fn numbered_dataset(count: usize) -> MockDomainListProvider {
        let entries: Vec<DomainEntry> = (0..count)
            .map(|i| DomainEntry::new(format!("site{i}.com")))
            .collect();
        let mut provider = MockDomainListProvider::new();
        provider
            .expect_fetch_domains()
            .times(1)
            .returning(move || Ok(entries.clone()));
        provider
    }

    /// Rank provider that echoes each requested domain with rank = name length.
    fn echo_ranks(expected_calls: usize) -> MockPageRankProvider {
        let mut provider = MockPageRankProvider::new();
        provider
            .expect_rank_batch()
            .times(expected_calls)
            .returning(|_, domains| {
                Ok(domains
                    .iter()
                    .map(|d| RankedDomain::new(d.clone(), PageRank::Rank(d.len() as i64)))
                    .collect())
            });
        provider
    }

    #[tokio::test]
    async fn test_fetch_page_merges_ranks() {
        let mut page_rank = MockPageRankProvider::new();
        page_rank
            .expect_rank_batch()
            .withf(|key, domains| key == "key" && domains == ["a.com", "b.com"])
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    RankedDomain::new("a.com", PageRank::Rank(5)),
                    RankedDomain::new("b.com", PageRank::Rank(3)),
                ])
            });

        let service = RankingService::new(
            Arc::new(dataset(&["a.com", "b.com"])),
            Arc::new(page_rank),
            settings_with_key("key"),
        );

        let page = service.fetch_page(1, "").await.unwrap();

        assert_eq!(
            page.rows,
            vec![
                RankedDomain::new("a.com", PageRank::Rank(5)),
                RankedDomain::new("b.com", PageRank::Rank(3)),
            ]
        );
        assert_eq!(page.total_domains, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_fetch_page_filters_before_paginating() {
        let service = RankingService::new(
            Arc::new(dataset(&["google.com", "apple.com", "google.de", "bing.com"])),
            Arc::new(echo_ranks(1)),
            settings_with_key("key"),
        );

        let page = service.fetch_page(1, "google").await.unwrap();

        let names: Vec<&str> = page.rows.iter().map(|r| r.domain.as_str()).collect();
        assert_eq!(names, vec!["google.com", "google.de"]);
        assert_eq!(page.total_domains, 2);
    }

    #[tokio::test]
    async fn test_fetch_page_without_matches_skips_rank_lookup() {
        let service = RankingService::new(
            Arc::new(dataset(&["a.com", "b.com"])),
            Arc::new(MockPageRankProvider::new()),
            unused_settings(),
        );

        let page = service.fetch_page(1, "xyz").await.unwrap();

        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(page.page_numbers().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_page_beyond_last_page_is_empty() {
        let service = RankingService::new(
            Arc::new(numbered_dataset(150)),
            Arc::new(MockPageRankProvider::new()),
            unused_settings(),
        );

        let page = service.fetch_page(3, "").await.unwrap();

        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page_numbers(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_fetch_page_second_page_window() {
        let service = RankingService::new(
            Arc::new(numbered_dataset(150)),
            Arc::new(echo_ranks(1)),
            settings_with_key("key"),
        );

        let page = service.fetch_page(2, "").await.unwrap();

        assert_eq!(page.rows.len(), 50);
        assert_eq!(page.rows[0].domain, "site100.com");
        assert_eq!(page.rows[49].domain, "site149.com");
    }

    #[tokio::test]
    async fn test_fetch_page_keeps_totals_when_ranks_are_partial() {
        let mut page_rank = MockPageRankProvider::new();
        page_rank
            .expect_rank_batch()
            .times(1)
            .returning(|_, _| Ok(vec![RankedDomain::new("site0.com", PageRank::Rank(1))]));

        let service = RankingService::new(
            Arc::new(numbered_dataset(250)),
            Arc::new(page_rank),
            settings_with_key("key"),
        );

        let page = service.fetch_page(1, "").await.unwrap();

        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.total_domains, 250);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn test_fetch_page_domain_list_transport_error() {
        let mut provider = MockDomainListProvider::new();
        provider
            .expect_fetch_domains()
            .times(1)
            .returning(|| Err(ProviderError::transport("connection refused")));

        let service = RankingService::new(
            Arc::new(provider),
            Arc::new(MockPageRankProvider::new()),
            unused_settings(),
        );

        let err = service.fetch_page(1, "").await.unwrap_err();

        assert!(matches!(err, AppError::Upstream { .. }));
        assert_eq!(err.message(), DOMAIN_LIST_FETCH_ERROR);
    }

    #[tokio::test]
    async fn test_fetch_page_domain_list_decode_error() {
        let mut provider = MockDomainListProvider::new();
        provider
            .expect_fetch_domains()
            .times(1)
            .returning(|| Err(ProviderError::decode("expected value at line 1 column 1")));

        let service = RankingService::new(
            Arc::new(provider),
            Arc::new(MockPageRankProvider::new()),
            unused_settings(),
        );

        let err = service.fetch_page(1, "").await.unwrap_err();

        assert_eq!(
            err.message(),
            "Error decoding JSON: expected value at line 1 column 1"
        );
    }

    #[tokio::test]
    async fn test_fetch_page_rank_error_reports_generic_failure() {
        let mut page_rank = MockPageRankProvider::new();
        page_rank
            .expect_rank_batch()
            .times(1)
            .returning(|_, _| Err(ProviderError::transport("timed out")));

        let service = RankingService::new(
            Arc::new(dataset(&["a.com"])),
            Arc::new(page_rank),
            settings_with_key("key"),
        );

        let err = service.fetch_page(1, "").await.unwrap_err();

        assert!(matches!(err, AppError::Upstream { .. }));
        assert_eq!(err.message(), PAGE_RANK_FETCH_ERROR);
    }

    #[tokio::test]
    async fn test_rank_domains_batches_sequentially() {
        let mut seq = Sequence::new();
        let mut page_rank = MockPageRankProvider::new();

        for expected_len in [100usize, 100, 50] {
            page_rank
                .expect_rank_batch()
                .withf(move |_, domains| domains.len() == expected_len)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, domains| {
                    Ok(domains
                        .iter()
                        .map(|d| RankedDomain::new(d.clone(), PageRank::NotAvailable))
                        .collect())
                });
        }

        let service = RankingService::new(
            Arc::new(MockDomainListProvider::new()),
            Arc::new(page_rank),
            settings_with_key("key"),
        );

        let names: Vec<String> = (0..250).map(|i| format!("site{i}.com")).collect();
        let ranked = service.rank_domains(&names).await.unwrap();

        assert_eq!(ranked.len(), 250);
        assert_eq!(ranked[0].domain, "site0.com");
        assert_eq!(ranked[249].domain, "site249.com");
    }

    #[tokio::test]
    async fn test_rank_domains_aborts_on_first_failed_batch() {
        let mut seq = Sequence::new();
        let mut page_rank = MockPageRankProvider::new();

        page_rank
            .expect_rank_batch()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, domains| {
                Ok(domains
                    .iter()
                    .map(|d| RankedDomain::new(d.clone(), PageRank::Rank(1)))
                    .collect())
            });
        page_rank
            .expect_rank_batch()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(ProviderError::invalid_response("missing `response` array")));

        let service = RankingService::new(
            Arc::new(MockDomainListProvider::new()),
            Arc::new(page_rank),
            settings_with_key("key"),
        );

        let names: Vec<String> = (0..250).map(|i| format!("site{i}.com")).collect();
        let err = service.rank_domains(&names).await.unwrap_err();

        assert_eq!(err.message(), PAGE_RANK_FETCH_ERROR);
    }

    #[tokio::test]
    async fn test_rank_domains_sends_empty_key_when_unset() {
        let mut repo = MockSettingsRepository::new();
        repo.expect_get().times(1).returning(|_| Ok(None));

        let mut page_rank = MockPageRankProvider::new();
        page_rank
            .expect_rank_batch()
            .withf(|key, _| key.is_empty())
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = RankingService::new(
            Arc::new(MockDomainListProvider::new()),
            Arc::new(page_rank),
            Arc::new(SettingsService::new(Arc::new(repo))),
        );

        let ranked = service.rank_domains(&["a.com".to_string()]).await.unwrap();
        assert!(ranked.is_empty());
    }
}
