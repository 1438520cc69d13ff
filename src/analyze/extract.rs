//! Regex and scan based extractors.
//!
//! Every extractor reads the original SQL text, matches keywords without
//! regard to case, and returns an empty or default value when its clause
//! is missing. None of them fail.

mod clauses;
mod joins;
mod pagination;
mod parameters;
mod subqueries;

pub use clauses::{
    extract_columns, extract_conditions, extract_group_by, extract_order_by, extract_tables
};
pub use joins::extract_joins;
pub use pagination::extract_pagination;
pub use parameters::extract_parameters;
use regex::Regex;
pub use subqueries::extract_subqueries;

use super::QueryType;

/// Classify a statement by its first whitespace-delimited token
pub fn determine_query_type(sql: &str) -> QueryType {
    sql.split_whitespace()
        .next()
        .map(QueryType::from_keyword)
        .unwrap_or_default()
}

/// First capture group of `regex` in `sql`, trimmed; `None` when absent or
/// blank.
fn clause_region<'a>(regex: &Regex, sql: &'a str) -> Option<&'a str> {
    regex
        .captures(sql)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}
