//! Domain records and their PageRank annotations.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// One record of the upstream domain dataset.
///
/// Only `rootDomain` is read; any other fields in the dataset are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainEntry {
    #[serde(rename = "rootDomain")]
    pub root_domain: String,
}

impl DomainEntry {
    pub fn new(root_domain: impl Into<String>) -> Self {
        Self {
            root_domain: root_domain.into(),
        }
    }
}

/// PageRank score of a domain as reported by the rank API.
///
/// Serializes as a JSON number, or as the string `"N/A"` when the API
/// returned no score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRank {
    Rank(i64),
    NotAvailable,
}

impl PageRank {
    /// Reads the `page_rank_integer` member of a rank API item.
    ///
    /// Missing and `null` values map to [`PageRank::NotAvailable`]. Numeric
    /// strings are accepted since the API has returned both forms.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .map_or(PageRank::NotAvailable, PageRank::Rank),
            Some(Value::String(s)) => s
                .trim()
                .parse()
                .map_or(PageRank::NotAvailable, PageRank::Rank),
            _ => PageRank::NotAvailable,
        }
    }
}

impl fmt::Display for PageRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRank::Rank(rank) => write!(f, "{rank}"),
            PageRank::NotAvailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for PageRank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageRank::Rank(rank) => serializer.serialize_i64(*rank),
            PageRank::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

/// A domain name annotated with its rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedDomain {
    pub domain: String,
    pub page_rank: PageRank,
}

impl RankedDomain {
    pub fn new(domain: impl Into<String>, page_rank: PageRank) -> Self {
        Self {
            domain: domain.into(),
            page_rank,
        }
    }
}

/// One page of ranked domains.
///
/// `total_domains` and `total_pages` describe the whole filtered dataset, not
/// `rows`, so page links stay stable whatever the rank lookup returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPage {
    pub rows: Vec<RankedDomain>,
    pub page: i64,
    pub per_page: usize,
    pub total_domains: usize,
    pub total_pages: usize,
}

impl DomainPage {
    /// Page numbers to link to, `1..=total_pages`.
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }
}
