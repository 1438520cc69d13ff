use std::sync::LazyLock;

use compact_str::{CompactString, format_compact};
use regex::Regex;

use crate::analyze::types::{ParameterKind, ParameterRef};

/// `:name` not preceded by another `:` (casts) or a word character
static NAMED_PARAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^:\w]):([A-Za-z_]\w*)").expect("valid regex"));

/// Characters that make an adjacent `?` part of an operator
const OPERATOR_NEIGHBOURS: [char; 3] = ['?', '|', '&'];

fn is_bare_placeholder(chars: &[char], index: usize) -> bool {
    let prev = index.checked_sub(1).and_then(|i| chars.get(i));
    let next = chars.get(index + 1);
    chars[index] == '?'
        && !prev.is_some_and(|c| OPERATOR_NEIGHBOURS.contains(c))
        && !next.is_some_and(|c| OPERATOR_NEIGHBOURS.contains(c))
}

/// Bind parameters in source order.
///
/// Named `:name` parameters come first, then bare `?` placeholders named
/// `param1`, `param2`, ... in order of appearance. A `?` next to another
/// `?`, `|` or `&` is treated as an operator, not a placeholder.
pub fn extract_parameters(sql: &str) -> Vec<ParameterRef> {
    let mut params: Vec<ParameterRef> = NAMED_PARAM_REGEX
        .captures_iter(sql)
        .map(|caps| ParameterRef {
            name: CompactString::from(&caps[1]),
            kind: ParameterKind::Named
        })
        .collect();

    let chars: Vec<char> = sql.chars().collect();
    let placeholders = (0..chars.len())
        .filter(|&i| is_bare_placeholder(&chars, i))
        .enumerate()
        .map(|(n, _)| ParameterRef {
            name: format_compact!("param{}", n + 1),
            kind: ParameterKind::Placeholder
        });
    params.extend(placeholders);
    params
}
