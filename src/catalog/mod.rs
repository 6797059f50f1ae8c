//! Product catalog
//!
//! Holds the static product collection that every query runs against.
//!
//! # Invariants
//!
//! - Product ids are unique
//! - The collection is loaded once and never mutated
//! - Facets are derived at load time and read-only

mod errors;
mod facets;
mod loader;
mod product;

pub use errors::{CatalogError, CatalogResult};
pub use facets::{price_range, CategoryFacet, Facets, PriceRange, CATEGORY_NAMES, PRICE_RANGES};
pub use loader::Catalog;
pub use product::{Product, SeoMeta, MAX_RATING};
