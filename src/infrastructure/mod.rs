//! Infrastructure layer for external integrations.
//!
//! This layer implements the traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest clients for the domain dataset and the PageRank API
//! - [`persistence`] - PostgreSQL repository implementations

pub mod http;
pub mod persistence;
