use std::sync::LazyLock;

use compact_str::CompactString;
use regex::Regex;

use crate::analyze::types::{DEFAULT_JOIN_TYPE, JoinInfo};

/// `[qualifier [OUTER]] JOIN table`
static JOIN_HEAD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(LEFT|RIGHT|INNER|OUTER|FULL|CROSS|NATURAL)\s+(?:OUTER\s+)?)?JOIN\s+([^\s,()]+)"
    )
    .expect("valid regex")
});

/// Clause keywords that end a join condition
static CONDITION_END_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:WHERE|GROUP|ORDER|LIMIT)\b|;").expect("valid regex")
});

/// Optional alias followed by `ON condition` or `USING (...)`
static CONDITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)^\s*(?:(?:AS\s+)?[\w"`]+\s+)?(?:ON\s+(.*)|(USING\b.*))$"#)
        .expect("valid regex")
});

fn join_condition(tail: &str) -> String {
    CONDITION_REGEX
        .captures(tail)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Every `JOIN` in the statement.
///
/// The type is the qualifier word before `JOIN` in uppercase, `INNER`
/// when there is none. The condition runs up to the next join or the next
/// WHERE, GROUP, ORDER, LIMIT, `;` or end of input; a join without
/// `ON`/`USING` has an empty condition. Joins on derived tables are not
/// reported.
pub fn extract_joins(sql: &str) -> Vec<JoinInfo> {
    let heads: Vec<_> = JOIN_HEAD_REGEX.captures_iter(sql).collect();
    let mut joins = Vec::with_capacity(heads.len());

    for (i, caps) in heads.iter().enumerate() {
        let (Some(whole), Some(table)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let next_head = heads
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(sql.len(), |m| m.start());
        let rest = &sql[whole.end()..next_head];
        let end = CONDITION_END_REGEX
            .find(rest)
            .map_or(rest.len(), |m| m.start());
        let join_type = caps
            .get(1)
            .map_or(CompactString::from(DEFAULT_JOIN_TYPE), |q| {
                CompactString::from(q.as_str().to_uppercase())
            });
        joins.push(JoinInfo {
            join_type,
            table: table.as_str().into(),
            condition: join_condition(&rest[..end])
        });
    }
    joins
}
