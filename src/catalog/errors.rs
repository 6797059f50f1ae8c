//! # Catalog Errors
//!
//! Error types for loading and validating a product catalog.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading and validation errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Catalog source could not be read
    #[error("Failed to read catalog {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    /// Catalog source is not a valid product array
    #[error("Invalid catalog JSON in {source_name}: {reason}")]
    ParseFailed { source_name: String, reason: String },

    /// Two products share an id
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    /// A product record violates a field constraint
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },
}

impl CatalogError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::ReadFailed { .. } => "CATALOG_READ_FAILED",
            CatalogError::ParseFailed { .. } => "CATALOG_PARSE_FAILED",
            CatalogError::DuplicateId(_) => "CATALOG_DUPLICATE_ID",
            CatalogError::InvalidProduct { .. } => "CATALOG_INVALID_PRODUCT",
        }
    }

    pub(crate) fn invalid(id: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::InvalidProduct {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
