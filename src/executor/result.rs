//! Result types for query execution

use serde::Serialize;

use crate::catalog::Product;

/// Ordered products matched by one query
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult<'a> {
    /// Products in result order
    pub products: Vec<&'a Product>,
    /// Number of products scanned (the whole catalog)
    pub total: usize,
    /// Number of products returned
    pub matched: usize,
}

impl<'a> QueryResult<'a> {
    pub(crate) fn new(products: Vec<&'a Product>, total: usize) -> Self {
        Self {
            matched: products.len(),
            products,
            total,
        }
    }

    /// Returns true if no products matched
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Product ids in result order
    pub fn ids(&self) -> Vec<&'a str> {
        self.products.iter().map(|p| p.id.as_str()).collect()
    }
}
