//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`DomainEntry`] - One record of the upstream domain dataset
//! - [`PageRank`] - A rank value, or the marker for an unavailable rank
//! - [`RankedDomain`] - A domain name paired with its rank
//! - [`DomainPage`] - One rendered page of ranked domains plus pagination totals
//! - [`Setting`] - A persisted name/value configuration pair

pub mod ranked_domain;
pub mod setting;

pub use ranked_domain::{DomainEntry, DomainPage, PageRank, RankedDomain};
pub use setting::{API_KEY_SETTING, Setting};
