pub mod web_auth;
