//! Query executor
//!
//! Runs plans against an in-memory catalog.
//!
//! Execution flow (strict order):
//! 1. Scan every product in catalog order
//! 2. Keep products matching all predicates
//! 3. Apply the sort (stable)
//! 4. Return the ordered result
//!
//! Execution is a pure function of catalog and query. The catalog is only
//! ever borrowed.

use crate::catalog::{Catalog, Product};
use crate::planner::{CatalogQuery, Predicate, QueryPlan, QueryPlanner};

use super::filters::PredicateFilter;
use super::result::QueryResult;
use super::sorter::ResultSorter;

/// Query executor bound to one catalog
#[derive(Debug, Clone, Copy)]
pub struct QueryExecutor<'a> {
    catalog: &'a Catalog,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Plans and executes a query
    pub fn execute(&self, query: &CatalogQuery) -> QueryResult<'a> {
        self.execute_plan(&QueryPlanner::plan(query))
    }

    /// Executes an already planned query.
    ///
    /// Deterministic: same plan + same catalog = same results.
    pub fn execute_plan(&self, plan: &QueryPlan) -> QueryResult<'a> {
        let mut matched = self.filter(&plan.predicates);
        ResultSorter::sort(&mut matched, plan.sort);

        tracing::trace!(
            predicates = plan.predicates.len(),
            sort = %plan.sort,
            matched = matched.len(),
            "query executed"
        );

        QueryResult::new(matched, self.catalog.len())
    }

    /// Text search only, in catalog order
    pub fn search(&self, term: &str) -> Vec<&'a Product> {
        let term = term.trim();
        if term.is_empty() {
            return self.catalog.products().iter().collect();
        }
        self.filter(&[Predicate::Text(term.to_lowercase())])
    }

    /// Products in exactly this category
    pub fn by_category(&self, category: &str) -> Vec<&'a Product> {
        self.collect(|p| p.category == category)
    }

    /// Products in exactly this subcategory
    pub fn by_subcategory(&self, subcategory: &str) -> Vec<&'a Product> {
        self.collect(|p| p.subcategory == subcategory)
    }

    /// Popular or best-selling products
    pub fn popular(&self) -> Vec<&'a Product> {
        self.collect(Product::is_featured)
    }

    pub fn premium(&self) -> Vec<&'a Product> {
        self.collect(|p| p.is_premium)
    }

    /// Point lookup by id, first match
    pub fn find(&self, id: &str) -> Option<&'a Product> {
        self.catalog.products().iter().find(|p| p.id == id)
    }

    fn filter(&self, predicates: &[Predicate]) -> Vec<&'a Product> {
        self.collect(|p| PredicateFilter::matches(p, predicates))
    }

    fn collect(&self, keep: impl Fn(&Product) -> bool) -> Vec<&'a Product> {
        self.catalog.products().iter().filter(|p| keep(p)).collect()
    }
}
