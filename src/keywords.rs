//! Keyword tables shared by the formatter and the analyzer.
//!
//! Four fixed, ordered sets of case-insensitive keywords:
//!
//! | Table | Contents |
//! |-------|----------|
//! | [`COMMANDS`] | Statement-starting verbs |
//! | [`CLAUSES`] | Clause markers, including multi-word joins and set operators |
//! | [`OPERATORS`] | Logical and comparison keywords |
//! | [`FUNCTIONS`] | Built-in functions and `CASE` keywords |
//!
//! Tables are built once on first use and never mutated afterwards.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

/// Ordered keyword table
pub type KeywordTable = IndexSet<&'static str>;

/// Statement-starting verbs
pub static COMMANDS: LazyLock<KeywordTable> = LazyLock::new(|| {
    IndexSet::from([
        "SELECT", "INSERT", "UPDATE", "DELETE", "CREATE", "ALTER", "DROP", "TRUNCATE", "MERGE",
        "REPLACE", "GRANT", "REVOKE", "WITH"
    ])
});

/// Structural clause markers
pub static CLAUSES: LazyLock<KeywordTable> = LazyLock::new(|| {
    IndexSet::from([
        "FROM",
        "WHERE",
        "GROUP BY",
        "HAVING",
        "ORDER BY",
        "LIMIT",
        "OFFSET",
        "JOIN",
        "INNER JOIN",
        "LEFT JOIN",
        "LEFT OUTER JOIN",
        "RIGHT JOIN",
        "RIGHT OUTER JOIN",
        "FULL JOIN",
        "FULL OUTER JOIN",
        "CROSS JOIN",
        "NATURAL JOIN",
        "UNION",
        "UNION ALL",
        "INTERSECT",
        "EXCEPT",
        "VALUES",
        "SET"
    ])
});

/// Logical and comparison keywords
pub static OPERATORS: LazyLock<KeywordTable> = LazyLock::new(|| {
    IndexSet::from([
        "AND", "OR", "NOT", "IN", "EXISTS", "BETWEEN", "LIKE", "ILIKE", "IS", "NULL", "AS", "ON",
        "ASC", "DESC", "ALL", "ANY", "INTO"
    ])
});

/// Built-in functions and conditional keywords
pub static FUNCTIONS: LazyLock<KeywordTable> = LazyLock::new(|| {
    IndexSet::from([
        "COUNT", "SUM", "AVG", "MIN", "MAX", "DISTINCT", "COALESCE", "CAST", "CASE", "WHEN",
        "THEN", "ELSE", "END"
    ])
});

/// Single regex matching any keyword of any table.
///
/// Alternatives are ordered longest first so that `LEFT OUTER JOIN` wins
/// over `LEFT`; internal spaces of multi-word keywords match any run of
/// whitespace.
static ANY_KEYWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let mut keywords: Vec<&str> = all_keywords().collect();
    keywords.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keywords.dedup();
    let alternation = keywords
        .iter()
        .map(|k| {
            k.split(' ')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("valid regex")
});

/// Iterate every keyword of the four tables in table order
pub fn all_keywords() -> impl Iterator<Item = &'static str> {
    COMMANDS
        .iter()
        .chain(CLAUSES.iter())
        .chain(OPERATORS.iter())
        .chain(FUNCTIONS.iter())
        .copied()
}

/// Check whether a single word or phrase is a statement command
pub fn is_command(word: &str) -> bool {
    COMMANDS.contains(word.to_uppercase().as_str())
}

/// Check whether a word or phrase is a clause keyword
pub fn is_clause(phrase: &str) -> bool {
    CLAUSES.contains(phrase.to_uppercase().as_str())
}

/// Length in words of the longest clause keyword
pub fn max_clause_words() -> usize {
    CLAUSES
        .iter()
        .map(|c| c.split(' ').count())
        .max()
        .unwrap_or(1)
}

/// Replace every keyword with its canonical uppercase form.
///
/// Matching is case-insensitive on word boundaries. Multi-word keywords are
/// rewritten with single internal spaces. Applying this twice yields the
/// same text as applying it once.
pub fn uppercase_keywords(sql: &str) -> String {
    ANY_KEYWORD_REGEX
        .replace_all(sql, |caps: &regex::Captures<'_>| {
            caps[0]
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_uppercase()
        })
        .into_owned()
}
