//! HTTP request handlers for API endpoints.

pub mod domains;
pub mod health;

pub use domains::domain_page_handler;
pub use health::health_handler;
