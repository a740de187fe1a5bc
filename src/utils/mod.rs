//! Helpers shared across layers.
//!
//! - [`sanitize`] - Plain-text sanitization of form input
//! - [`mask`] - Redaction of secrets for logs and CLI output

pub mod mask;
pub mod sanitize;
