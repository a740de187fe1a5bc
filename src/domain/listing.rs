//! Search filtering and offset pagination over the domain dataset.

use crate::domain::entities::DomainEntry;

/// Number of domains shown per page.
pub const PAGE_SIZE: usize = 100;

/// Returns the names of all entries containing `search`, in dataset order.
///
/// Matching is a case-sensitive substring test. An empty term keeps every
/// entry.
pub fn filter_by_search(entries: Vec<DomainEntry>, search: &str) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.root_domain)
        .filter(|name| search.is_empty() || name.contains(search))
        .collect()
}

/// Returns the 1-based `page` of `items`.
///
/// Pages before the first or past the last one are empty.
pub fn page_window<T>(items: &[T], page: i64, per_page: usize) -> &[T] {
    if page < 1 || per_page == 0 {
        return &[];
    }

    let offset = usize::try_from(page - 1)
        .ok()
        .and_then(|index| index.checked_mul(per_page));

    match offset {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(per_page).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}

/// Reads a page number the lenient way form values are read.
///
/// Leading whitespace and one sign are accepted, then the leading run of
/// digits is used and the rest ignored. Text without leading digits reads as
/// 0, and values past the `i64` range saturate.
pub fn parse_page_number(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |value, digit| {
            let digit = i64::from(digit - b'0');
            if negative {
                value.saturating_mul(10).saturating_sub(digit)
            } else {
                value.saturating_mul(10).saturating_add(digit)
            }
        })
}

/// Number of pages needed to show `total` items.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}
