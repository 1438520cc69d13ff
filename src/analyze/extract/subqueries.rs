use crate::scan::is_subquery_start;

/// Raw text of top-level parenthesized `SELECT` blocks, parentheses included.
///
/// One forward scan with a depth counter. A capture opens at a `(` that
/// starts a subquery and closes with the `)` that returns depth to the
/// opening level. Text is kept verbatim, inner whitespace included;
/// subqueries nested in a capture are part of its text and are not listed
/// separately. A capture still open at the end of input is dropped.
pub fn extract_subqueries(sql: &str) -> Vec<String> {
    let chars: Vec<char> = sql.chars().collect();
    let mut found = Vec::new();
    let mut depth = 0usize;
    let mut capture: Option<(usize, String)> = None;

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '(' => {
                let opens_capture = capture.is_none() && is_subquery_start(&chars, i);
                if opens_capture {
                    capture = Some((depth, String::new()));
                }
                depth += 1;
            }
            ')' => {
                depth = depth.saturating_sub(1);
                if capture.as_ref().is_some_and(|(level, _)| *level == depth)
                    && let Some((_, mut text)) = capture.take()
                {
                    text.push(c);
                    found.push(text);
                    continue;
                }
            }
            _ => {}
        }
        if let Some((_, text)) = capture.as_mut() {
            text.push(c);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_subquery() {
        let subs = extract_subqueries("SELECT * FROM t WHERE id IN (SELECT uid FROM u)");
        assert_eq!(subs, vec!["(SELECT uid FROM u)"]);
    }

    #[test]
    fn test_nested_subquery_captured_once() {
        let subs = extract_subqueries(
            "SELECT * FROM t WHERE id IN (SELECT uid FROM u WHERE x IN (SELECT y FROM v))"
        );
        assert_eq!(
            subs,
            vec!["(SELECT uid FROM u WHERE x IN (SELECT y FROM v))"]
        );
    }

    #[test]
    fn test_sibling_subqueries() {
        let subs = extract_subqueries(
            "SELECT a,(SELECT max(a) FROM x) AS m FROM t WHERE b = (SELECT min(b) FROM y)"
        );
        assert_eq!(subs, vec!["(SELECT min(b) FROM y)"]);
        let subs = extract_subqueries(
            "SELECT a, (SELECT max(a) FROM x) AS m FROM t WHERE b = (SELECT min(b) FROM y)"
        );
        assert_eq!(subs, vec!["(SELECT max(a) FROM x)", "(SELECT min(b) FROM y)"]);
    }

    #[test]
    fn test_capture_keeps_raw_text() {
        let subs = extract_subqueries("SELECT * FROM t WHERE id IN ( SELECT uid FROM u )");
        assert_eq!(subs, vec!["( SELECT uid FROM u )"]);
    }

    #[test]
    fn test_unterminated_capture_dropped() {
        assert!(extract_subqueries("SELECT * FROM t WHERE a IN (SELECT b FROM u").is_empty());
    }

    #[test]
    fn test_plain_parens_ignored() {
        assert!(extract_subqueries("SELECT count(*) FROM t WHERE a IN (1, 2)").is_empty());
    }
}
