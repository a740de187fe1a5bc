//! Plain-text sanitization for user-supplied form fields.
//!
//! Used for the stored API key and the domain search term. The rules:
//!
//! - `<script>` and `<style>` elements are removed with their contents
//! - Other HTML tags (and a dangling `<` tag start) are removed
//! - Percent-encoded octets such as `%0A` are removed
//! - Runs of whitespace, line breaks and tabs collapse to one space
//! - Leading and trailing whitespace is trimmed

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_STYLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*?>.*?</script\s*>|<style\b[^>]*?>.*?</style\s*>").unwrap()
});

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>?").unwrap());

static OCTET_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%[0-9a-fA-F]{2}").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Sanitizes a single-line text field.
///
/// # Examples
///
/// ```
/// use domain_rank::utils::sanitize::sanitize_text_field;
///
/// assert_eq!(sanitize_text_field("  <b>abc</b>\n def "), "abc def");
/// ```
pub fn sanitize_text_field(input: &str) -> String {
    let without_elements = SCRIPT_STYLE_REGEX.replace_all(input, "");
    let without_tags = TAG_REGEX.replace_all(&without_elements, "");
    let without_octets = OCTET_REGEX.replace_all(&without_tags, "");
    let collapsed = WHITESPACE_REGEX.replace_all(&without_octets, " ");
    collapsed.trim().to_string()
}
