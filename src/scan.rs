//! Character-level scanning helpers shared by the formatter and analyzer.

/// Number of characters inspected after `(` when looking for `SELECT`
pub const SUBQUERY_LOOKAHEAD: usize = 8;

/// Check whether the `(` at `index` opens a subquery.
///
/// The paren must be immediately preceded by a space, and the next
/// [`SUBQUERY_LOOKAHEAD`] characters, once left-trimmed, must start with
/// `SELECT` in any case. `IN(SELECT ...)` is therefore not a boundary.
pub fn is_subquery_start(chars: &[char], index: usize) -> bool {
    if chars.get(index) != Some(&'(') || index == 0 || chars[index - 1] != ' ' {
        return false;
    }
    let end = (index + 1 + SUBQUERY_LOOKAHEAD).min(chars.len());
    let window: String = chars[index + 1..end].iter().collect();
    window.trim_start().to_uppercase().starts_with("SELECT")
}

/// Split SQL text into statements on `;`.
///
/// Semicolons inside single- or double-quoted strings do not split. Pieces
/// are trimmed and empty pieces are dropped.
pub fn split_statements(sql: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (pos, c) in sql.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, ';') => {
                push_statement(&mut statements, &sql[start..pos]);
                start = pos + 1;
            }
            (None, _) => {}
        }
    }
    push_statement(&mut statements, &sql[start..]);
    statements
}

fn push_statement<'a>(statements: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        statements.push(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_subquery_start_detected() {
        let sql = chars("WHERE id IN (SELECT id FROM t)");
        let pos = sql.iter().position(|c| *c == '(').unwrap();
        assert!(is_subquery_start(&sql, pos));
    }

    #[test]
    fn test_subquery_start_allows_inner_spaces() {
        let sql = chars("x IN (  select 1)");
        assert!(is_subquery_start(&sql, 5));
    }

    #[test]
    fn test_subquery_start_requires_preceding_space() {
        let sql = chars("x IN(SELECT 1)");
        assert!(!is_subquery_start(&sql, 4));
        let sql = chars("(SELECT 1)");
        assert!(!is_subquery_start(&sql, 0));
    }

    #[test]
    fn test_subquery_start_rejects_function_call() {
        let sql = chars("SELECT count (id) FROM t");
        assert!(!is_subquery_start(&sql, 13));
    }

    #[test]
    fn test_subquery_start_lookahead_is_bounded() {
        let sql = chars("x IN (     SELECT 1)");
        assert!(!is_subquery_start(&sql, 5));
    }

    #[test]
    fn test_subquery_start_near_end_of_input() {
        let sql = chars("x (SEL");
        assert!(!is_subquery_start(&sql, 2));
    }

    #[test]
    fn test_split_statements() {
        let parts = split_statements("SELECT 1; SELECT 'a;b';\n\n; UPDATE t SET x = 1");
        assert_eq!(parts, vec!["SELECT 1", "SELECT 'a;b'", "UPDATE t SET x = 1"]);
    }

    #[test]
    fn test_split_statements_empty() {
        assert!(split_statements("  ;; ").is_empty());
    }
}
