//! DTOs for the ranked domain listing.

use serde::Serialize;

use crate::domain::entities::{DomainPage, RankedDomain};

/// One page of ranked domains with pagination totals.
#[derive(Debug, Serialize)]
pub struct DomainPageResponse {
    pub page: i64,
    pub per_page: usize,
    pub total_domains: usize,
    pub total_pages: usize,
    pub items: Vec<RankedDomain>,
}

impl From<DomainPage> for DomainPageResponse {
    fn from(page: DomainPage) -> Self {
        Self {
            page: page.page,
            per_page: page.per_page,
            total_domains: page.total_domains,
            total_pages: page.total_pages,
            items: page.rows,
        }
    }
}

/// Success envelope returned by the admin fetch action.
///
/// Failures use the same shape with `success: false`, produced by
/// [`crate::error::AppError`].
#[derive(Debug, Serialize)]
pub struct ActionResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ActionResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
