//! Catalog query execution
//!
//! The executor consumes plans and produces deterministic, ordered results.
//!
//! # Execution Flow (strict order)
//!
//! 1. Scan the catalog in source order
//! 2. Filter by category, then price range, then text search
//! 3. Apply the single sort selected by the query
//! 4. Return borrowed products with scan/match counts
//!
//! # Invariants
//!
//! - Pure: no I/O, no mutation of the catalog
//! - Stable: ties keep catalog order
//! - Infallible: unknown facet values simply match nothing

mod executor;
mod filters;
mod result;
mod sorter;

pub use executor::QueryExecutor;
pub use filters::PredicateFilter;
pub use result::QueryResult;
pub use sorter::ResultSorter;
