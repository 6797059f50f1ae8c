//! Predicate filtering for query execution
//!
//! A product survives only if it passes every predicate in the plan.
//! Unknown facet values and missing prices never match.

use crate::catalog::Product;
use crate::planner::Predicate;

/// Evaluates predicates against products
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a product matches all predicates
    pub fn matches(product: &Product, predicates: &[Predicate]) -> bool {
        predicates
            .iter()
            .all(|pred| Self::matches_predicate(product, pred))
    }

    /// Checks if a product matches a single predicate
    pub fn matches_predicate(product: &Product, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::Category(category) => product.category == *category,
            Predicate::PriceRange(range) => product.price.is_some_and(|p| range.contains(p)),
            Predicate::UnknownPriceRange(_) => false,
            Predicate::Text(needle) => Self::text_match(product, needle),
        }
    }

    /// Case-insensitive substring search across the searchable fields.
    ///
    /// `needle` must already be lowercased.
    pub fn text_match(product: &Product, needle: &str) -> bool {
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

        [
            &product.name,
            &product.description,
            &product.category,
            &product.subcategory,
            &product.size,
            &product.material,
        ]
        .into_iter()
        .any(|field| contains(field))
            || product.tags.iter().any(|tag| contains(tag))
            || product.features.iter().any(|feature| contains(feature))
    }
}
