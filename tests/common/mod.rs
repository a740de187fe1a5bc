#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use chrono::Utc;
use domain_rank::application::services::{AuthService, RankingService, SettingsService};
use domain_rank::domain::entities::{DomainEntry, PageRank, RankedDomain, Setting};
use domain_rank::domain::providers::{DomainListProvider, PageRankProvider, ProviderError};
use domain_rank::domain::repositories::{ApiToken, SettingsRepository, TokenRepository};
use domain_rank::error::AppError;
use domain_rank::state::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower::Layer;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_TOKEN: &str = "test-admin-token";

// ─── Settings ────────────────────────────────────────────────────────────────

/// Settings stored in memory. `failing` makes every call a database error.
#[derive(Default)]
pub struct InMemorySettings {
    values: Mutex<HashMap<String, String>>,
    pub failing: bool,
}

impl InMemorySettings {
    pub fn with(name: &str, value: &str) -> Self {
        let settings = Self::default();
        settings
            .values
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        settings
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn value(&self, name: &str) -> Option<String> {
        self.values.lock().unwrap().get(name).cloned()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettings {
    async fn get(&self, name: &str) -> Result<Option<Setting>, AppError> {
        if self.failing {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(self
            .value(name)
            .map(|value| Setting::new(name, value, Utc::now())))
    }

    async fn upsert(&self, name: &str, value: &str) -> Result<Setting, AppError> {
        if self.failing {
            return Err(AppError::internal("Database error", json!({})));
        }
        self.values
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        Ok(Setting::new(name, value, Utc::now()))
    }
}

// ─── Tokens ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryTokens {
    tokens: Mutex<Vec<ApiToken>>,
}

#[async_trait]
impl TokenRepository for InMemoryTokens {
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .any(|t| t.token_hash == token_hash && t.revoked_at.is_none()))
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        for token in self.tokens.lock().unwrap().iter_mut() {
            if token.token_hash == token_hash {
                token.last_used_at = Some(Utc::now());
            }
        }
        Ok(())
    }

    async fn create_token(&self, name: &str, token_hash: &str) -> Result<ApiToken, AppError> {
        let mut tokens = self.tokens.lock().unwrap();
        let token = ApiToken {
            id: tokens.len() as i64 + 1,
            name: name.to_string(),
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };
        tokens.push(token.clone());
        Ok(token)
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError> {
        Ok(self.tokens.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ApiToken>, AppError> {
        Ok(self.tokens.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }

    async fn revoke_token(&self, id: i64) -> Result<(), AppError> {
        for token in self.tokens.lock().unwrap().iter_mut() {
            if token.id == id && token.revoked_at.is_none() {
                token.revoked_at = Some(Utc::now());
            }
        }
        Ok(())
    }
}

// ─── Upstream providers ──────────────────────────────────────────────────────

/// Serves a fixed dataset, or a fixed error.
pub struct StaticDomainList {
    result: Result<Vec<DomainEntry>, ProviderError>,
}

impl StaticDomainList {
    pub fn new(names: &[&str]) -> Self {
        Self {
            result: Ok(names.iter().map(|name| DomainEntry::new(*name)).collect()),
        }
    }

    pub fn numbered(count: usize) -> Self {
        Self {
            result: Ok((0..count)
                .map(|i| DomainEntry::new(format!("site{i}.com")))
                .collect()),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl DomainListProvider for StaticDomainList {
    async fn fetch_domains(&self) -> Result<Vec<DomainEntry>, ProviderError> {
        self.result.clone()
    }
}

/// Ranks from a lookup table and records every batch it receives.
#[derive(Default)]
pub struct RecordingPageRank {
    ranks: HashMap<String, i64>,
    error: Option<ProviderError>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl RecordingPageRank {
    pub fn with_ranks(ranks: &[(&str, i64)]) -> Self {
        Self {
            ranks: ranks
                .iter()
                .map(|(domain, rank)| (domain.to_string(), *rank))
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// `(api_key, domains)` of every call, in order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageRankProvider for RecordingPageRank {
    async fn rank_batch(
        &self,
        api_key: &str,
        domains: &[String],
    ) -> Result<Vec<RankedDomain>, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), domains.to_vec()));

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        Ok(domains
            .iter()
            .map(|domain| {
                let rank = match self.ranks.get(domain) {
                    Some(value) => PageRank::Rank(*value),
                    None => PageRank::NotAvailable,
                };
                RankedDomain::new(domain.as_str(), rank)
            })
            .collect())
    }
}

// ─── State ───────────────────────────────────────────────────────────────────

pub struct TestContext {
    pub state: AppState,
    pub settings: Arc<InMemorySettings>,
    pub page_rank: Arc<RecordingPageRank>,
}

/// Builds an [`AppState`] over in-memory fakes with [`TEST_TOKEN`] registered.
pub async fn create_test_state(
    domain_list: StaticDomainList,
    page_rank: RecordingPageRank,
    settings: InMemorySettings,
) -> TestContext {
    let settings = Arc::new(settings);
    let page_rank = Arc::new(page_rank);

    let settings_service = Arc::new(SettingsService::new(settings.clone()));
    let ranking_service = Arc::new(RankingService::new(
        Arc::new(domain_list),
        page_rank.clone(),
        settings_service.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(InMemoryTokens::default()),
        TEST_SECRET.to_string(),
    ));

    auth_service
        .create_token("test", TEST_TOKEN)
        .await
        .unwrap();

    TestContext {
        state: AppState::new(ranking_service, settings_service, auth_service),
        settings,
        page_rank,
    }
}

// ─── Connect info ────────────────────────────────────────────────────────────

/// Inserts a fixed peer address, as `into_make_service_with_connect_info` would.
///
/// The per-IP rate limiters reject requests without one.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
