use smallvec::SmallVec;

use super::FormatOptions;
use crate::scan::is_subquery_start;

/// Put subquery parentheses on their own lines.
///
/// Single forward scan. Each `(` that opens a subquery is followed by a
/// newline and indentation for the new depth; its paired `)` moves to a
/// fresh line indented to the enclosing depth. Other parentheses are copied
/// unchanged. Unbalanced input never drops the depth below zero.
pub fn format_subqueries(sql: &str, options: &FormatOptions) -> String {
    let chars: Vec<char> = sql.chars().collect();
    let mut out = String::with_capacity(sql.len() + 16);
    let mut depth = 0usize;
    let mut open_subqueries: SmallVec<[usize; 4]> = SmallVec::new();

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '(' => {
                depth += 1;
                out.push('(');
                if is_subquery_start(&chars, i) {
                    open_subqueries.push(depth);
                    out.push('\n');
                    out.push_str(&options.indent_by(depth));
                }
            }
            ')' => {
                if open_subqueries.last() == Some(&depth) {
                    open_subqueries.pop();
                    depth -= 1;
                    trim_trailing_spaces(&mut out);
                    out.push('\n');
                    out.push_str(&options.indent_by(depth));
                } else {
                    depth = depth.saturating_sub(1);
                }
                out.push(')');
            }
            _ => out.push(c)
        }
    }
    out
}

fn trim_trailing_spaces(out: &mut String) {
    let trimmed = out.trim_end_matches([' ', '\t']).len();
    out.truncate(trimmed);
}
