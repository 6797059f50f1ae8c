//! Query parameter decoding
//!
//! Two sources feed a `CatalogQuery`:
//! - page query strings (`search`, `category`, `price`, `sort`)
//! - JSON request objects (`searchTerm`, `category`, `priceRangeId`, `sortKey`)
//!
//! Decoding never fails. Missing, empty or unrecognised values fall back to
//! the neutral query: no search, all categories, any price, `default_sort`.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use url::form_urlencoded;

use super::ast::{facet_selection, CatalogQuery, SortKey};

/// Loosely-typed request, as received from a caller
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub search_term: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub price_range_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sort_key: Option<String>,
}

impl QueryRequest {
    /// Reads the storefront's query-string keys from decoded pairs.
    ///
    /// Unknown keys are ignored.
    pub fn from_pairs(params: &HashMap<String, String>) -> Self {
        Self {
            search_term: params.get("search").cloned(),
            category: params.get("category").cloned(),
            price_range_id: params.get("price").cloned(),
            sort_key: params.get("sort").cloned(),
        }
    }

    /// Parses a raw query string such as `search=bread&category=containers`.
    ///
    /// A leading `?` is allowed. When a key repeats, the last value wins.
    pub fn from_query_string(qs: &str) -> Self {
        Self::from_pairs(&parse_query_string(qs))
    }

    /// Parses a JSON request object.
    ///
    /// Fields of the wrong type read as unset. Only a value that is not an
    /// object at all is an error.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Overlays every field that `other` sets on top of `self`
    pub fn merge(mut self, other: QueryRequest) -> Self {
        if other.search_term.is_some() {
            self.search_term = other.search_term;
        }
        if other.category.is_some() {
            self.category = other.category;
        }
        if other.price_range_id.is_some() {
            self.price_range_id = other.price_range_id;
        }
        if other.sort_key.is_some() {
            self.sort_key = other.sort_key;
        }
        self
    }

    /// Resolves to a query, substituting neutral values for anything unusable
    pub fn into_query(self, default_sort: SortKey) -> CatalogQuery {
        let sort_key = match self.sort_key.as_deref().map(str::trim) {
            None | Some("") => default_sort,
            Some(raw) => SortKey::parse(raw).unwrap_or_else(|| {
                tracing::debug!(sort_key = raw, fallback = %default_sort, "unknown sort key");
                default_sort
            }),
        };

        CatalogQuery {
            search_term: self.search_term.unwrap_or_default(),
            category: self.category.and_then(facet_selection),
            price_range_id: self.price_range_id.and_then(facet_selection),
            sort_key,
        }
    }
}

/// Splits and percent-decodes a query string into key/value pairs
pub fn parse_query_string(qs: &str) -> HashMap<String, String> {
    form_urlencoded::parse(qs.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

/// Reads an optional string field. Values of any other JSON type are
/// dropped so the field takes its neutral value.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => {
            tracing::debug!(value = %other, "ignoring non-string query field");
            Ok(None)
        }
    }
}
