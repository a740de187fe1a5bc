//! Provider trait for PageRank lookups.

use crate::domain::entities::RankedDomain;
use crate::domain::providers::ProviderError;
use async_trait::async_trait;

/// Maximum number of domains the rank API accepts in one request.
pub const RANK_BATCH_SIZE: usize = 100;

/// Looks up PageRank scores for batches of domains.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::OpenPageRankClient`] - OpenPageRank REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRankProvider: Send + Sync {
    /// Ranks one batch of at most [`RANK_BATCH_SIZE`] domains.
    ///
    /// Results come back in the order the API reports them. Items the API
    /// returns in an unexpected form are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] on network failure,
    /// [`ProviderError::Decode`] if the body is not JSON, and
    /// [`ProviderError::InvalidResponse`] if it has no `response` array.
    async fn rank_batch(
        &self,
        api_key: &str,
        domains: &[String],
    ) -> Result<Vec<RankedDomain>, ProviderError>;
}
