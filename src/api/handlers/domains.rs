//! Handler for the ranked domain listing endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::domains::DomainPageResponse;
use crate::api::dto::pagination::DomainQueryParams;
use crate::error::AppError;
use crate::state::AppState;

/// Returns one page of domains with their PageRank.
///
/// # Endpoint
///
/// `GET /api/domains?page=1&search=goo`
///
/// # Response
///
/// ```json
/// {
///   "page": 1,
///   "per_page": 100,
///   "total_domains": 2,
///   "total_pages": 1,
///   "items": [
///     { "domain": "google.com", "page_rank": 10 },
///     { "domain": "goo.gl", "page_rank": "N/A" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the parameters are invalid.
/// Returns 502 if the domain list or the rank API fails.
pub async fn domain_page_handler(
    State(state): State<AppState>,
    Query(params): Query<DomainQueryParams>,
) -> Result<Json<DomainPageResponse>, AppError> {
    let (page, search) = params.into_page_and_search()?;

    let domain_page = state.ranking_service.fetch_page(page, &search).await?;

    Ok(Json(domain_page.into()))
}
