//! Domain table action used by the admin page script.

use askama::Template;
use axum::{Form, Json, extract::State};
use serde_json::json;

use crate::api::dto::domains::ActionResponse;
use crate::api::dto::pagination::DomainQueryParams;
use crate::domain::entities::{DomainPage, RankedDomain};
use crate::{error::AppError, state::AppState};

/// A numbered link in the pagination row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub number: usize,
    pub current: bool,
}

/// HTML fragment with the domain table and page links.
///
/// Domain names come from a remote dataset and are escaped by Askama.
#[derive(Template)]
#[template(path = "domain_table.html")]
pub struct DomainTableTemplate {
    pub rows: Vec<RankedDomain>,
    pub page_links: Vec<PageLink>,
}

impl From<DomainPage> for DomainTableTemplate {
    fn from(page: DomainPage) -> Self {
        let current = usize::try_from(page.page).ok();
        let page_links = page
            .page_numbers()
            .into_iter()
            .map(|number| PageLink {
                number,
                current: Some(number) == current,
            })
            .collect();

        Self {
            rows: page.rows,
            page_links,
        }
    }
}

/// Returns one page of ranked domains as an HTML fragment.
///
/// # Endpoint
///
/// `POST /admin/domains` (form fields `page`, `search`)
///
/// # Response
///
/// ```json
/// { "success": true, "data": "<table>...</table><div class=\"pagination\">...</div>" }
/// ```
///
/// Upstream failures answer `{ "success": false, "data": "<message>" }`.
pub async fn fetch_domains_handler(
    State(st): State<AppState>,
    Form(params): Form<DomainQueryParams>,
) -> Result<Json<ActionResponse<String>>, AppError> {
    let (page, search) = params.into_page_and_search()?;

    let domain_page = st.ranking_service.fetch_page(page, &search).await?;

    let html = DomainTableTemplate::from(domain_page).render().map_err(|e| {
        tracing::error!(error = %e, "Failed to render domain table");
        AppError::internal("Failed to render domain table", json!({}))
    })?;

    Ok(Json(ActionResponse::ok(html)))
}
