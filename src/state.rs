//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, RankingService, SettingsService};

/// Services shared by all handlers.
///
/// Cloning is cheap: every field is an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    pub ranking_service: Arc<RankingService>,
    pub settings_service: Arc<SettingsService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(
        ranking_service: Arc<RankingService>,
        settings_service: Arc<SettingsService>,
        auth_service: Arc<AuthService>,
    ) -> Self {
        Self {
            ranking_service,
            settings_service,
            auth_service,
        }
    }
}
