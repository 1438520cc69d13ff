use std::sync::LazyLock;

use compact_str::CompactString;
use regex::Regex;

use super::clause_region;
use crate::analyze::types::{ColumnRef, ColumnVec, Direction, OrderSpec, TableRef};

/// `FROM` up to WHERE, GROUP, ORDER, LIMIT, `;` or end of input
static FROM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bFROM\s+(.*?)(?:\s+(?:WHERE|GROUP|ORDER|LIMIT)\b|\s*;|$)")
        .expect("valid regex")
});

/// Separators between `FROM` items: commas and JOIN phrases
static TABLE_SEPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*,\s*|\s+(?:(?:LEFT|RIGHT|FULL|INNER|OUTER|CROSS|NATURAL)\s+)*JOIN\s+")
        .expect("valid regex")
});

/// Start of a join condition inside a `FROM` item
static JOIN_CONDITION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:ON|USING)\b").expect("valid regex"));

static SELECT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\bSELECT\s+(.*?)\s+FROM\b").expect("valid regex"));

static DISTINCT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^DISTINCT\s+").expect("valid regex"));

/// `expression AS alias`, alias being the last identifier
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)^(.+?)\s+AS\s+([\w"`\[\]]+)$"#).expect("valid regex")
});

static WHERE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bWHERE\s+(.*?)(?:\s+(?:GROUP|ORDER|LIMIT)\b|\s*;|$)").expect("valid regex")
});

static LOGICAL_SPLIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:AND|OR)\s+").expect("valid regex"));

static ORDER_BY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bORDER\s+BY\s+(.*?)(?:\s+(?:LIMIT|OFFSET)\b|\s*;|$)").expect("valid regex")
});

static GROUP_BY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bGROUP\s+BY\s+(.*?)(?:\s+(?:HAVING|ORDER|LIMIT)\b|\s*;|$)")
        .expect("valid regex")
});

/// Copy of `text` where everything inside parentheses is replaced by `x`,
/// byte for byte, so match offsets map back onto the original.
fn mask_parenthesized(text: &str) -> String {
    let mut depth = 0usize;
    let mut masked = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' => {
                depth += 1;
                masked.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                masked.push(c);
            }
            _ if depth > 0 => masked.extend(std::iter::repeat_n('x', c.len_utf8())),
            _ => masked.push(c)
        }
    }
    masked
}

fn is_identifier(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '"' | '`' | '[' | ']'))
}

fn parse_table_item(item: &str) -> Option<TableRef> {
    let item = match JOIN_CONDITION_REGEX.find(item) {
        Some(m) => &item[..m.start()],
        None => item
    };
    let mut words = item.split_whitespace();
    let name = words.next()?;
    if name.starts_with('(') {
        return None;
    }
    let alias = match words.next() {
        Some(word) if word.eq_ignore_ascii_case("AS") => words.next(),
        other => other
    };
    Some(TableRef {
        name:  name.into(),
        alias: alias.filter(|a| is_identifier(a)).map(CompactString::from)
    })
}

/// Tables named between `FROM` and the next major clause.
///
/// Items are separated by commas and by JOIN phrases, so tables brought in
/// through `JOIN` are listed here as well as by
/// [`extract_joins`](super::extract_joins). Aliases come from `AS alias` or
/// a bare identifier after the name. Parenthesized items are skipped.
pub fn extract_tables(sql: &str) -> Vec<TableRef> {
    let Some(region) = clause_region(&FROM_REGEX, sql) else {
        return Vec::new();
    };
    let masked = mask_parenthesized(region);
    let mut tables = Vec::new();
    let mut start = 0;
    for sep in TABLE_SEPARATOR_REGEX.find_iter(&masked) {
        tables.extend(parse_table_item(&region[start..sep.start()]));
        start = sep.end();
    }
    tables.extend(parse_table_item(&region[start..]));
    tables
}

/// Items of the first `SELECT` list.
///
/// A bare `*` yields nothing. Items are split on every comma, including
/// commas inside function calls. A leading `DISTINCT` is dropped.
pub fn extract_columns(sql: &str) -> Vec<ColumnRef> {
    let Some(region) = clause_region(&SELECT_REGEX, sql) else {
        return Vec::new();
    };
    if region == "*" {
        return Vec::new();
    }
    let region = DISTINCT_REGEX.replace(region, "");
    region
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| match ALIAS_REGEX.captures(item) {
            Some(caps) => ColumnRef {
                expression: caps[1].trim().to_string(),
                alias:      Some(CompactString::from(&caps[2]))
            },
            None => ColumnRef {
                expression: item.to_string(),
                alias:      None
            }
        })
        .collect()
}

/// `WHERE` fragments split before each `AND` / `OR`.
///
/// The connector stays at the head of the fragment it introduces, so
/// `a = 1 AND b = 2` yields `a = 1` and `AND b = 2`. Grouping and
/// precedence are not preserved; `BETWEEN a AND b` splits too.
pub fn extract_conditions(sql: &str) -> Vec<String> {
    let Some(region) = clause_region(&WHERE_REGEX, sql) else {
        return Vec::new();
    };
    let mut fragments = Vec::new();
    let mut start = 0;
    for boundary in LOGICAL_SPLIT_REGEX.find_iter(region) {
        fragments.push(&region[start..boundary.start()]);
        start = boundary.start();
    }
    fragments.push(&region[start..]);
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_order_item(item: &str) -> Option<OrderSpec> {
    let words: Vec<&str> = item.split_whitespace().collect();
    let direction_at = words.iter().skip(1).position(|w| {
        w.eq_ignore_ascii_case("ASC") || w.eq_ignore_ascii_case("DESC")
    });
    let (column, direction) = match direction_at {
        Some(offset) => {
            let idx = offset + 1;
            let direction = if words[idx].eq_ignore_ascii_case("DESC") {
                Direction::Desc
            } else {
                Direction::Asc
            };
            (words[..idx].join(" "), direction)
        }
        None => (words.join(" "), Direction::Asc)
    };
    if column.is_empty() {
        return None;
    }
    Some(OrderSpec {
        column: column.into(),
        direction
    })
}

/// `ORDER BY` items; direction defaults to `ASC`
pub fn extract_order_by(sql: &str) -> Vec<OrderSpec> {
    let Some(region) = clause_region(&ORDER_BY_REGEX, sql) else {
        return Vec::new();
    };
    region.split(',').filter_map(parse_order_item).collect()
}

/// `GROUP BY` expressions, trimmed
pub fn extract_group_by(sql: &str) -> ColumnVec {
    let Some(region) = clause_region(&GROUP_BY_REGEX, sql) else {
        return ColumnVec::new();
    };
    region
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(CompactString::from)
        .collect()
}
