//! Page and search parameters shared by the JSON API and the admin action.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::domain::listing::parse_page_number;
use crate::error::AppError;
use crate::utils::sanitize::sanitize_text_field;

/// Page number as sent by a form or query string.
///
/// Parsing never fails: text that is not a number reads as page 0, which
/// lists nothing. See [`parse_page_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParam(pub i64);

impl FromStr for PageParam {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PageParam(parse_page_number(s)))
    }
}

impl fmt::Display for PageParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Page number and search term of a domain listing request.
///
/// Uses `serde_with` to read the page number from query strings and form
/// bodies, where every value arrives as text.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct DomainQueryParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<PageParam>,

    #[serde(default)]
    #[validate(length(max = 255, message = "Search term is too long"))]
    pub search: Option<String>,
}

impl DomainQueryParams {
    /// Validates the parameters and returns `(page, search)`.
    ///
    /// # Defaults
    ///
    /// - `page`: 1 when absent; unreadable text is page 0
    /// - `search`: empty, meaning no filtering
    ///
    /// The search term is sanitized as plain text. Page numbers are not
    /// range-checked: pages outside the list are simply empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the search term exceeds 255 characters.
    pub fn into_page_and_search(self) -> Result<(i64, String), AppError> {
        self.validate().map_err(|e| {
            AppError::bad_request("Invalid query parameters", serde_json::json!(e))
        })?;

        let page = self.page.map_or(1, |PageParam(page)| page);
        let search = self
            .search
            .as_deref()
            .map(sanitize_text_field)
            .unwrap_or_default();

        Ok((page, search))
    }
}
