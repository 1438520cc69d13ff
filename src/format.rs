//! Best-effort SQL pretty-printer.
//!
//! Formatting is a fixed pipeline of text transforms; each step consumes
//! the previous step's output:
//!
//! 1. Trim
//! 2. Normalize whitespace ([`normalize_whitespace`])
//! 3. Uppercase keywords, when enabled
//! 4. Clause line breaks and paren indentation ([`insert_line_breaks`])
//! 5. Subquery parentheses ([`format_subqueries`])
//! 6. `SELECT` column alignment ([`align_select_columns`])
//! 7. Long-line wrapping ([`wrap_long_lines`])
//!
//! The output is meant for reading. It is not guaranteed to reparse, and
//! nothing here validates SQL.
//!
//! # Example
//!
//! ```
//! use sql_glance::format::{FormatOptions, format_sql};
//!
//! let opts = FormatOptions {
//!     lines_between_clauses: 0,
//!     ..Default::default()
//! };
//! let out = format_sql("select id from users where id=1", &opts);
//! assert_eq!(out, "SELECT id\nFROM users\nWHERE id = 1");
//! ```

mod align;
mod layout;
mod options;
mod subquery;
mod wrap;

pub use align::align_select_columns;
pub use layout::{insert_line_breaks, normalize_whitespace};
pub use options::{FormatOptions, FormatOverrides};
use rayon::prelude::*;
pub use subquery::format_subqueries;
use tracing::debug;
pub use wrap::wrap_long_lines;

use crate::{keywords::uppercase_keywords, scan::split_statements};

/// Format a single SQL statement.
///
/// Empty or whitespace-only input yields an empty string. Never fails.
pub fn format_sql(sql: &str, options: &FormatOptions) -> String {
    let sql = sql.trim();
    if sql.is_empty() {
        return String::new();
    }
    let normalized = normalize_whitespace(sql);
    let cased = if options.uppercase {
        uppercase_keywords(&normalized)
    } else {
        normalized
    };
    let broken = insert_line_breaks(&cased, options);
    let nested = format_subqueries(&broken, options);
    let aligned = align_select_columns(&nested);
    let wrapped = wrap_long_lines(&aligned, options);
    debug!(
        input_len = sql.len(),
        lines = wrapped.lines().count(),
        "formatted statement"
    );
    wrapped
}

/// Format with partial options merged over the defaults
pub fn format_sql_with(sql: &str, overrides: &FormatOverrides) -> String {
    format_sql(sql, &FormatOptions::from(overrides))
}

/// Split input on `;` and format every statement (parallel)
///
/// Output order follows input order.
pub fn format_statements(sql: &str, options: &FormatOptions) -> Vec<String> {
    let statements = split_statements(sql);
    debug!(count = statements.len(), "formatting statements");
    statements
        .into_par_iter()
        .map(|stmt| format_sql(stmt, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(format_sql("", &FormatOptions::default()), "");
        assert_eq!(format_sql("   \n\t ", &FormatOptions::default()), "");
    }

    #[test]
    fn test_default_pipeline() {
        let out = format_sql(
            "select id,name from users where id=1 order by name",
            &FormatOptions::default()
        );
        assert_eq!(
            out,
            "SELECT id, name\n\nFROM users\n\nWHERE id = 1\n\nORDER BY name"
        );
    }

    #[test]
    fn test_lowercase_preserved_when_disabled() {
        let opts = FormatOptions {
            uppercase: false,
            lines_between_clauses: 0,
            ..Default::default()
        };
        assert_eq!(format_sql("select a from t", &opts), "select a\nfrom t");
    }

    #[test]
    fn test_subquery_pipeline() {
        let opts = FormatOptions {
            lines_between_clauses: 0,
            ..Default::default()
        };
        let out = format_sql("select a from t where a in (select b from u)", &opts);
        assert_eq!(out, "SELECT a\nFROM t\nWHERE a IN (\n  SELECT b\n  FROM u\n)");
    }

    #[test]
    fn test_insert_into_stays_on_one_line() {
        let opts = FormatOptions {
            lines_between_clauses: 0,
            ..Default::default()
        };
        let out = format_sql("insert into t values (1)", &opts);
        assert_eq!(out, "INSERT INTO t\nVALUES (1)");
    }

    #[test]
    fn test_statements_keep_order() {
        let opts = FormatOptions {
            lines_between_clauses: 0,
            ..Default::default()
        };
        let out = format_statements("select a from t; delete from u", &opts);
        assert_eq!(out, vec!["SELECT a\nFROM t", "DELETE\nFROM u"]);
    }
}
