//! Settings form handler.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use super::admin::AdminTemplate;
use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub dlp_api_key: String,
}

/// Saves the OpenPageRank API key.
///
/// # Endpoint
///
/// `POST /admin/settings` (form field `dlp_api_key`)
///
/// Redirects to `/admin?settings-updated=true` on success. A rejected key
/// re-renders the page with `400 Bad Request` and the validation message.
pub async fn save_settings_handler(
    State(st): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> Result<Response, AppError> {
    match st.settings_service.update_api_key(&form.dlp_api_key).await {
        Ok(_) => Ok(Redirect::to("/admin?settings-updated=true").into_response()),
        Err(AppError::Validation { message, .. }) => {
            let current = st.settings_service.api_key().await?;
            let mut page = AdminTemplate::new(current);
            page.error = Some(message);
            Ok((StatusCode::BAD_REQUEST, page).into_response())
        }
        Err(e) => Err(e),
    }
}
