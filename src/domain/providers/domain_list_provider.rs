//! Provider trait for the domain dataset.

use crate::domain::entities::DomainEntry;
use crate::domain::providers::ProviderError;
use async_trait::async_trait;

/// Source of the full domain list, in dataset order.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::TopSitesClient`] - HTTP GET of a JSON file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainListProvider: Send + Sync {
    /// Fetches every record of the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] if the dataset cannot be retrieved.
    /// Returns [`ProviderError::Decode`] if the body is not a list of domain records.
    async fn fetch_domains(&self) -> Result<Vec<DomainEntry>, ProviderError>;
}
