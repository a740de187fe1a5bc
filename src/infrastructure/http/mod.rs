//! HTTP clients for the upstream services.
//!
//! # Clients
//!
//! - [`TopSitesClient`] - Fetches the JSON domain dataset
//! - [`OpenPageRankClient`] - Looks up PageRank scores in batches
//!
//! Both share one [`reqwest::Client`] built by [`build_http_client`], so the
//! connection pool and timeout are configured in a single place.

pub mod open_page_rank_client;
pub mod top_sites_client;

pub use open_page_rank_client::{API_KEY_HEADER, OpenPageRankClient};
pub use top_sites_client::TopSitesClient;

use anyhow::{Context, Result};
use std::time::Duration;

/// Builds the shared outbound HTTP client.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")
}
