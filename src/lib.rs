//! visto-catalog - a deterministic, in-memory product catalog query engine
//!
//! Given a static product collection and a query (search term, category,
//! price range, sort key), produces the ordered list of matching products.
//!
//! ```
//! use visto_catalog::catalog::Catalog;
//! use visto_catalog::executor::QueryExecutor;
//! use visto_catalog::planner::{CatalogQuery, SortKey};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let query = CatalogQuery::new()
//!     .with_category("containers")
//!     .with_sort(SortKey::Rating);
//!
//! let result = QueryExecutor::new(&catalog).execute(&query);
//! assert_eq!(result.products[0].name, "Feel Fresh Large Container");
//! ```

pub mod catalog;
pub mod cli;
pub mod executor;
pub mod observability;
pub mod planner;
