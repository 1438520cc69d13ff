use std::sync::LazyLock;

use regex::Regex;

use crate::analyze::types::Pagination;

/// `LIMIT n` or MySQL `LIMIT offset, n`
static LIMIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bLIMIT\s+(\d+)(?:\s*,\s*(\d+))?").expect("valid regex"));

static OFFSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bOFFSET\s+(\d+)").expect("valid regex"));

/// `LIMIT` and `OFFSET` values.
///
/// Both are optional. Values that do not fit in `u64` are treated as
/// absent. An explicit `OFFSET` wins over the offset of `LIMIT a, b`.
pub fn extract_pagination(sql: &str) -> Pagination {
    let mut pagination = Pagination::default();
    if let Some(caps) = LIMIT_REGEX.captures(sql) {
        match caps.get(2) {
            Some(count) => {
                pagination.limit = count.as_str().parse().ok();
                pagination.offset = caps[1].parse().ok();
            }
            None => pagination.limit = caps[1].parse().ok()
        }
    }
    if let Some(caps) = OFFSET_REGEX.captures(sql) {
        pagination.offset = caps[1].parse().ok();
    }
    pagination
}
