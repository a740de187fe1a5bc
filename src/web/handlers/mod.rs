//! Handlers for the admin page, its forms and the domain table action.

mod admin;
mod domains;
mod login;
mod settings;

pub use admin::{AdminTemplate, admin_page_handler};
pub use domains::{DomainTableTemplate, PageLink, fetch_domains_handler};
pub use login::{login_page_handler, login_submit_handler, logout_handler};
pub use settings::save_settings_handler;
