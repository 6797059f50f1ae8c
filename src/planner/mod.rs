//! Query planning
//!
//! Turns caller input into an explicit query, and the query into a plan.
//!
//! # Design Principles
//!
//! - Decoding never fails: bad input degrades to the neutral query
//! - Deterministic: same query, same plan
//! - Predicates are evaluated in a fixed order: category, price, search

mod ast;
mod explain;
mod params;
mod planner;

pub use ast::{CatalogQuery, SortKey, ALL};
pub use explain::ExplainPlan;
pub use params::{parse_query_string, QueryRequest};
pub use planner::{Predicate, QueryPlan, QueryPlanner};
