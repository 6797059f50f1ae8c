//! Query planner
//!
//! Turns a `CatalogQuery` into the list of active predicates, in the fixed
//! order category, price range, text search. Inactive facets produce no
//! predicate at all.

use crate::catalog::{price_range, PriceRange};

use super::ast::{CatalogQuery, SortKey};

/// A single active filter clause
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Exact, case-sensitive category match
    Category(String),
    /// Price within a known range, bounds inclusive
    PriceRange(&'static PriceRange),
    /// A range id missing from the table. Matches nothing.
    UnknownPriceRange(String),
    /// Lowercased needle searched across the text fields
    Text(String),
}

impl Predicate {
    /// Short name for explain output
    pub fn kind(&self) -> &'static str {
        match self {
            Predicate::Category(_) => "category",
            Predicate::PriceRange(_) | Predicate::UnknownPriceRange(_) => "price",
            Predicate::Text(_) => "search",
        }
    }

    /// Human-readable clause
    pub fn describe(&self) -> String {
        match self {
            Predicate::Category(c) => format!("category == {:?}", c),
            Predicate::PriceRange(r) => match r.max {
                Some(max) => format!("price in [{}, {}]", r.min, max),
                None => format!("price >= {}", r.min),
            },
            Predicate::UnknownPriceRange(id) => {
                format!("price range {:?} (unknown, matches nothing)", id)
            }
            Predicate::Text(t) => format!("text contains {:?}", t),
        }
    }
}

/// Immutable plan: predicates applied with AND semantics, then one sort
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub predicates: Vec<Predicate>,
    pub sort: SortKey,
}

impl QueryPlan {
    /// True when the plan keeps every product
    pub fn is_full_scan(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// Stateless planner
pub struct QueryPlanner;

impl QueryPlanner {
    /// Plans a query. Planning cannot fail.
    pub fn plan(query: &CatalogQuery) -> QueryPlan {
        let mut predicates = Vec::with_capacity(3);

        if let Some(category) = &query.category {
            predicates.push(Predicate::Category(category.clone()));
        }

        if let Some(id) = &query.price_range_id {
            predicates.push(match price_range(id) {
                Some(range) => Predicate::PriceRange(range),
                None => Predicate::UnknownPriceRange(id.clone()),
            });
        }

        if let Some(term) = query.effective_search() {
            predicates.push(Predicate::Text(term.to_lowercase()));
        }

        QueryPlan {
            predicates,
            sort: query.sort_key,
        }
    }
}
