use super::FormatOptions;

/// Re-flow every line longer than `max_line_length`.
///
/// Tokens are packed greedily. Continuation lines carry the original
/// leading whitespace plus one indent unit; when that prefix would push a
/// token past the limit the prefix is shortened instead. A single token
/// longer than the limit is emitted on its own line, unsplit.
pub fn wrap_long_lines(sql: &str, options: &FormatOptions) -> String {
    let max = options.max_line_length;
    if max == 0 {
        return sql.to_string();
    }
    sql.split('\n')
        .map(|line| {
            if width(line) > max {
                wrap_line(line, options)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn prefixed(prefix: &str, token: &str, max: usize) -> String {
    let room = max.saturating_sub(width(token));
    let mut line: String = prefix.chars().take(room).collect();
    line.push_str(token);
    line
}

fn wrap_line(line: &str, options: &FormatOptions) -> String {
    let max = options.max_line_length;
    let leading = &line[..line.len() - line.trim_start().len()];
    let continuation = format!("{}{}", leading, options.indent);
    let mut lines: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for token in line.split_whitespace() {
        current = Some(match current.take() {
            None => prefixed(leading, token, max),
            Some(mut open) if width(&open) + 1 + width(token) <= max => {
                open.push(' ');
                open.push_str(token);
                open
            }
            Some(full) => {
                lines.push(full);
                prefixed(&continuation, token, max)
            }
        });
    }
    lines.extend(current);
    lines.join("\n")
}
