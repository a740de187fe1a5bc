//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, upstream clients, and Axum server lifecycle.

use crate::application::services::{AuthService, RankingService, SettingsService};
use crate::config::Config;
use crate::infrastructure::http::{OpenPageRankClient, TopSitesClient, build_http_client};
use crate::infrastructure::persistence::{PgSettingsRepository, PgTokenRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Shared outbound HTTP client
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let state = build_state(&config, Arc::new(pool))?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Wires repositories, upstream clients and services into [`AppState`].
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_state(config: &Config, pool: Arc<sqlx::PgPool>) -> Result<AppState> {
    let http = build_http_client(config.http_timeout())?;

    let settings_repository = Arc::new(PgSettingsRepository::new(pool.clone()));
    let token_repository = Arc::new(PgTokenRepository::new(pool));

    let settings_service = Arc::new(SettingsService::new(settings_repository));
    let ranking_service = Arc::new(RankingService::new(
        Arc::new(TopSitesClient::new(http.clone(), &config.domain_list_url)),
        Arc::new(OpenPageRankClient::new(http, &config.page_rank_api_url)),
        settings_service.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(
        token_repository,
        config.token_signing_secret.clone(),
    ));

    Ok(AppState::new(ranking_service, settings_service, auth_service))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
