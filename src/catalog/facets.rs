//! Derived facets: categories, sizes and price ranges
//!
//! Computed once when a catalog is built and read-only afterwards.

use std::collections::BTreeSet;

use serde::Serialize;

use super::product::Product;

/// Category ids and their display names, in listing order
pub const CATEGORY_NAMES: &[(&str, &str)] = &[
    ("containers", "Food Containers"),
    ("container-sets", "Container Sets"),
    ("specialty", "Specialty Items"),
];

/// Named price bounds, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub id: &'static str,
    pub name: &'static str,
    pub min: f64,
    /// `None` means no upper bound
    pub max: Option<f64>,
}

impl PriceRange {
    /// Returns true if `price` falls within `[min, max]`
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

/// The fixed price range table
pub const PRICE_RANGES: &[PriceRange] = &[
    PriceRange {
        id: "under-200",
        name: "Under ₹200",
        min: 0.0,
        max: Some(200.0),
    },
    PriceRange {
        id: "200-400",
        name: "₹200 - ₹400",
        min: 200.0,
        max: Some(400.0),
    },
    PriceRange {
        id: "400-600",
        name: "₹400 - ₹600",
        min: 400.0,
        max: Some(600.0),
    },
    PriceRange {
        id: "above-600",
        name: "Above ₹600",
        min: 600.0,
        max: None,
    },
];

/// Looks up a price range by id
pub fn price_range(id: &str) -> Option<&'static PriceRange> {
    PRICE_RANGES.iter().find(|range| range.id == id)
}

/// A category with the number of products filed under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFacet {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// All facets derived from one catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub categories: Vec<CategoryFacet>,
    /// Distinct size labels in ascending string order
    pub sizes: Vec<String>,
    pub price_ranges: Vec<PriceRange>,
}

impl Facets {
    pub fn derive(products: &[Product]) -> Self {
        let categories = CATEGORY_NAMES
            .iter()
            .map(|(id, name)| CategoryFacet {
                id: id.to_string(),
                name: name.to_string(),
                count: products.iter().filter(|p| p.category == *id).count(),
            })
            .collect();

        let sizes = products
            .iter()
            .map(|p| p.size.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            categories,
            sizes,
            price_ranges: PRICE_RANGES.to_vec(),
        }
    }

    /// Count for a category id, zero when unknown
    pub fn category_count(&self, id: &str) -> usize {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map_or(0, |c| c.count)
    }
}
