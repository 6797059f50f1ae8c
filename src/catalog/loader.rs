//! Catalog construction from the embedded dataset or a JSON file
//!
//! A catalog is validated once at load time:
//! - every product passes `Product::validate`
//! - ids are unique
//!
//! After that it is immutable for the life of the process.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::errors::{CatalogError, CatalogResult};
use super::facets::Facets;
use super::product::Product;

/// The storefront's product list, compiled into the binary
const BUILTIN_PRODUCTS: &str = include_str!("../../data/products.json");

/// An immutable, validated product collection with its derived facets
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    facets: Facets,
}

impl Catalog {
    /// Builds a catalog from an owned product list.
    ///
    /// Fails on the first invalid product or duplicate id.
    pub fn from_products(products: Vec<Product>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        let facets = Facets::derive(&products);
        tracing::debug!(products = products.len(), "catalog built");

        Ok(Self { products, facets })
    }

    /// Parses a JSON array of products.
    ///
    /// `source_name` only appears in error messages.
    pub fn from_json_str(json: &str, source_name: &str) -> CatalogResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseFailed {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_products(products)
    }

    /// Loads a catalog from a JSON file on disk
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&content, &path.display().to_string())
    }

    /// The embedded storefront catalog
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json_str(BUILTIN_PRODUCTS, "<builtin>")
    }

    /// Products in source order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
