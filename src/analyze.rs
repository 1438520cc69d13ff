//! Heuristic structural analysis of SQL statements.
//!
//! No parser is involved: each field of [`QueryAnalysis`] comes from an
//! independent regex or character scan over the original text, bounded by
//! the next major clause keyword. Unrecognized or malformed SQL degrades
//! to empty fields. Known limitations are part of the contract:
//!
//! - commas inside function calls split `SELECT` items
//! - `WHERE` is split on `AND`/`OR` with no regard for precedence
//! - subqueries nested inside a captured subquery are not listed
//!
//! # Example
//!
//! ```
//! use sql_glance::analyze::{QueryType, analyze};
//!
//! let analysis = analyze("SELECT * FROM t LIMIT 10 OFFSET 20").unwrap();
//! assert_eq!(analysis.query_type, QueryType::Select);
//! assert_eq!(analysis.pagination.limit, Some(10));
//! assert_eq!(analysis.pagination.offset, Some(20));
//! ```

mod complexity;
mod extract;
mod types;

use std::{any::Any, panic};

pub use complexity::{ComplexityLevel, calculate_complexity};
pub use extract::{
    determine_query_type, extract_columns, extract_conditions, extract_group_by, extract_joins,
    extract_order_by, extract_pagination, extract_parameters, extract_subqueries, extract_tables
};
use rayon::prelude::*;
use tracing::{debug, error};
pub use types::{
    ColumnRef, ColumnVec, DEFAULT_JOIN_TYPE, Direction, JoinInfo, OrderSpec, Pagination,
    ParameterKind, ParameterRef, QueryAnalysis, QueryType, TableRef
};

use crate::{
    cache::{cache_analysis, get_cached},
    error::{AppResult, analysis_failed},
    scan::split_statements
};

fn build_analysis(sql: &str) -> QueryAnalysis {
    let mut analysis = QueryAnalysis {
        query_type: determine_query_type(sql),
        tables: extract_tables(sql),
        columns: extract_columns(sql),
        conditions: extract_conditions(sql),
        joins: extract_joins(sql),
        order_by: extract_order_by(sql),
        group_by: extract_group_by(sql),
        pagination: extract_pagination(sql),
        parameters: extract_parameters(sql),
        subqueries: extract_subqueries(sql),
        complexity: 0
    };
    analysis.complexity = calculate_complexity(&analysis);
    analysis
}

fn panic_detail(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

/// Run `build` behind the analysis failure boundary
///
/// The process panic hook is left alone, so a caught fault is still
/// reported on stderr by the hook before it becomes an error here.
fn analyze_guarded<F>(sql: &str, build: F) -> AppResult<QueryAnalysis>
where
    F: FnOnce(&str) -> QueryAnalysis + panic::UnwindSafe
{
    panic::catch_unwind(|| build(sql)).map_err(|payload| {
        let detail = panic_detail(payload.as_ref());
        error!(detail, "SQL analysis failed");
        analysis_failed(detail)
    })
}

/// Analyze a single SQL statement.
///
/// SQL that is not recognized yields a [`QueryType::Unknown`] analysis with
/// empty fields; that is a normal outcome. An error is returned only when
/// an extractor faults internally.
pub fn analyze(sql: &str) -> AppResult<QueryAnalysis> {
    let analysis = analyze_guarded(sql, build_analysis)?;
    debug!(
        query_type = %analysis.query_type,
        tables = analysis.tables.len(),
        joins = analysis.joins.len(),
        complexity = analysis.complexity,
        "analyzed statement"
    );
    Ok(analysis)
}

/// Split input on `;` and analyze every statement (parallel, cached)
///
/// # Notes
///
/// - Output order follows input order
/// - Repeated statements are served from the process-wide cache
pub fn analyze_statements(sql: &str) -> AppResult<Vec<QueryAnalysis>> {
    let statements = split_statements(sql);
    debug!(count = statements.len(), "analyzing statements");
    statements
        .into_par_iter()
        .map(|stmt| {
            if let Some(cached) = get_cached(stmt) {
                return Ok(cached);
            }
            let analysis = analyze(stmt)?;
            cache_analysis(stmt, analysis.clone());
            Ok(analysis)
        })
        .collect()
}
