//! Explain output
//!
//! Describes what a query would do without running it.

use serde::Serialize;

use super::planner::QueryPlan;

/// Serializable description of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainPlan {
    /// One entry per active predicate, in evaluation order
    pub predicates: Vec<String>,
    pub sort: String,
    /// False when no product can match, e.g. an unknown price range
    pub satisfiable: bool,
}

impl ExplainPlan {
    pub fn from_plan(plan: &QueryPlan) -> Self {
        use super::planner::Predicate;

        Self {
            predicates: plan.predicates.iter().map(|p| p.describe()).collect(),
            sort: plan.sort.as_str().to_string(),
            satisfiable: !plan
                .predicates
                .iter()
                .any(|p| matches!(p, Predicate::UnknownPriceRange(_))),
        }
    }
}
