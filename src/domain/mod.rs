//! Domain layer containing business entities and listing rules.
//!
//! Nothing in this module talks to the network or the database. Data access and
//! upstream lookups are expressed as traits implemented by
//! [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - Domain records, ranks and the assembled result page
//! - [`listing`] - Search filtering and offset pagination over the dataset
//! - [`repositories`] - Persistence traits (settings, admin tokens)
//! - [`providers`] - Upstream traits (domain dataset, PageRank lookup)
//!
//! # Fetch Flow
//!
//! 1. [`providers::DomainListProvider`] returns the full dataset
//! 2. [`listing::filter_by_search`] narrows it to matching names
//! 3. [`listing::page_window`] cuts out the requested page
//! 4. [`providers::PageRankProvider`] annotates the page with ranks
//! 5. The result is wrapped in an [`entities::DomainPage`]

pub mod entities;
pub mod listing;
pub mod providers;
pub mod repositories;
