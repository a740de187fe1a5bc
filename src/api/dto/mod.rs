//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for serialization; request parameters are checked with
//! `validator`.

pub mod domains;
pub mod health;
pub mod pagination;
