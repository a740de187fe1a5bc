//! Upstream data provider traits.
//!
//! Implementations live in [`crate::infrastructure::http`]; mocks are generated
//! with `mockall` under `cfg(test)`.
//!
//! # Available Providers
//!
//! - [`DomainListProvider`] - The remote domain dataset
//! - [`PageRankProvider`] - The PageRank lookup API

pub mod domain_list_provider;
pub mod page_rank_provider;

pub use domain_list_provider::DomainListProvider;
pub use page_rank_provider::{PageRankProvider, RANK_BATCH_SIZE};

#[cfg(test)]
pub use domain_list_provider::MockDomainListProvider;
#[cfg(test)]
pub use page_rank_provider::MockPageRankProvider;

use thiserror::Error;

/// Failure talking to an upstream service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The request could not be sent, timed out, or returned a non-success status.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The body was not valid JSON of the expected type.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// The body was JSON but not shaped like a valid response.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },
}

impl ProviderError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}
