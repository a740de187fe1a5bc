//! Admin page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::domain::entities::API_KEY_SETTING;
use crate::{error::AppError, state::AppState};

/// Template for the admin page.
///
/// Renders `templates/admin.html` with the API key form, optional notices,
/// and the script that loads the domain table.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub api_key_field: &'static str,
    pub api_key: String,
    pub settings_updated: bool,
    pub error: Option<String>,
}

impl AdminTemplate {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key_field: API_KEY_SETTING,
            api_key,
            settings_updated: false,
            error: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    #[serde(rename = "settings-updated")]
    settings_updated: Option<String>,
}

/// Renders the admin page.
///
/// # Endpoint
///
/// `GET /admin`
///
/// `?settings-updated=true` shows the "Settings saved." notice.
pub async fn admin_page_handler(
    State(st): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<AdminTemplate, AppError> {
    let api_key = st.settings_service.api_key().await?;

    let mut page = AdminTemplate::new(api_key);
    page.settings_updated = query.settings_updated.as_deref() == Some("true");
    Ok(page)
}
