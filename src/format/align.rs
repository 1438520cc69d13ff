/// Check that `line` begins with `keyword` as a whole word, ignoring case
pub(crate) fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    let line = line.trim_start();
    let Some(head) = line.get(..keyword.len()) else {
        return false;
    };
    head.eq_ignore_ascii_case(keyword)
        && !line[keyword.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Align the column lines of every `SELECT ... FROM` block.
///
/// Column lines are the non-blank lines strictly between a line starting
/// with `SELECT` and the next line starting with `FROM`. Each is padded to
/// the widest column and all but the last get a trailing comma. A block
/// with no `FROM` line is left untouched.
pub fn align_select_columns(sql: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut block: Option<Vec<&str>> = None;

    for line in sql.split('\n') {
        if starts_with_keyword(line, "SELECT") {
            if let Some(pending) = block.take() {
                out.extend(pending.into_iter().map(String::from));
            }
            out.push(line.to_string());
            block = Some(Vec::new());
        } else if starts_with_keyword(line, "FROM")
            && let Some(interior) = block.take()
        {
            out.extend(align_block(&interior));
            out.push(line.to_string());
        } else if let Some(pending) = block.as_mut() {
            pending.push(line);
        } else {
            out.push(line.to_string());
        }
    }
    if let Some(pending) = block {
        out.extend(pending.into_iter().map(String::from));
    }
    out.join("\n")
}

fn column_content(line: &str) -> &str {
    line.trim().trim_end_matches(',').trim_end()
}

fn align_block(interior: &[&str]) -> Vec<String> {
    let width = interior
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| column_content(l).chars().count())
        .max()
        .unwrap_or(0);
    let last_column = interior.iter().rposition(|l| !l.trim().is_empty());

    interior
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if line.trim().is_empty() {
                return line.to_string();
            }
            let leading = &line[..line.len() - line.trim_start().len()];
            let separator = if Some(i) == last_column { "" } else { "," };
            format!(
                "{}{:<width$}{}",
                leading,
                column_content(line),
                separator,
                width = width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligns_interior_columns() {
        let sql = "SELECT\n  id\n  name,\n  created_at\nFROM users";
        assert_eq!(
            align_select_columns(sql),
            "SELECT\n  id        ,\n  name      ,\n  created_at\nFROM users"
        );
    }

    #[test]
    fn test_blank_interior_lines_are_kept() {
        let sql = "SELECT a, b\n\nFROM t";
        assert_eq!(align_select_columns(sql), sql);
    }

    #[test]
    fn test_block_without_from_untouched() {
        let sql = "SELECT\n  a\n  b";
        assert_eq!(align_select_columns(sql), sql);
    }

    #[test]
    fn test_keyword_must_be_whole_word() {
        assert!(starts_with_keyword("  select a", "SELECT"));
        assert!(!starts_with_keyword("selection", "SELECT"));
        assert!(!starts_with_keyword("FROM_DATE", "FROM"));
        assert!(starts_with_keyword("FROM", "FROM"));
    }
}
