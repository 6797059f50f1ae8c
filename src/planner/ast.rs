//! Catalog query structures
//!
//! A `CatalogQuery` is the explicit form of the listing page's UI state:
//! search box, category dropdown, price dropdown and sort dropdown.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sentinel accepted wherever a facet can be left unrestricted
pub const ALL: &str = "all";

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Ascending by name
    #[default]
    Name,
    /// Ascending by price
    PriceLow,
    /// Descending by price
    PriceHigh,
    /// Descending by rating
    Rating,
    /// Best sellers, then popular, then most reviewed
    Popularity,
    /// Descending by id. There is no creation timestamp, so this is only
    /// a proxy for recency.
    Newest,
    /// Ascending by the magnitude embedded in the size label
    Size,
}

impl SortKey {
    pub const ALL_KEYS: [SortKey; 7] = [
        SortKey::Name,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Popularity,
        SortKey::Newest,
        SortKey::Size,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Popularity => "popularity",
            SortKey::Newest => "newest",
            SortKey::Size => "size",
        }
    }

    /// Parses a sort key, `None` when unrecognised
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL_KEYS
            .iter()
            .copied()
            .find(|key| key.as_str() == s.trim())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            let known: Vec<_> = Self::ALL_KEYS.iter().map(|k| k.as_str()).collect();
            format!("unknown sort key '{}', expected one of: {}", s, known.join(", "))
        })
    }
}

/// One catalog view: search term, facet selections and sort order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    /// Free text, matched case-insensitively. Empty means no search.
    pub search_term: String,
    /// Exact category id. `None` means all categories.
    pub category: Option<String>,
    /// Price range id. `None` means any price.
    pub price_range_id: Option<String>,
    pub sort_key: SortKey,
}

impl CatalogQuery {
    /// A query that keeps everything, sorted by name
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Restricts to a category. The "all" sentinel clears the restriction.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = facet_selection(category.into());
        self
    }

    /// Restricts to a price range. The "all" sentinel clears the restriction.
    pub fn with_price_range(mut self, id: impl Into<String>) -> Self {
        self.price_range_id = facet_selection(id.into());
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// The search term with surrounding whitespace removed, if any is left
    pub fn effective_search(&self) -> Option<&str> {
        let term = self.search_term.trim();
        (!term.is_empty()).then_some(term)
    }

    /// True when no filter is active
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none()
            && self.price_range_id.is_none()
            && self.effective_search().is_none()
    }
}

/// Maps a raw facet value to a trimmed selection; empty or "all" is no selection
pub(crate) fn facet_selection(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == ALL {
        None
    } else {
        Some(trimmed.to_string())
    }
}
