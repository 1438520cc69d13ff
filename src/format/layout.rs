//! Whitespace normalization and clause line breaking.

use std::sync::LazyLock;

use regex::Regex;

use super::FormatOptions;
use crate::keywords::{is_clause, max_clause_words};

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static COMMA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("valid regex"));

/// Compound operators are listed first so `<=` is not split into `<` `=`
static COMPARISON_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(<=|>=|<>|!=|=|<|>)\s*").expect("valid regex"));

static OPEN_PAREN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s+").expect("valid regex"));

static CLOSE_PAREN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\)").expect("valid regex"));

/// Collapse whitespace and normalize spacing around commas, comparison
/// operators and parentheses.
pub fn normalize_whitespace(sql: &str) -> String {
    let result = WHITESPACE_REGEX.replace_all(sql, " ");
    let result = COMMA_REGEX.replace_all(&result, ", ");
    let result = COMPARISON_REGEX.replace_all(&result, " $1 ");
    let result = OPEN_PAREN_REGEX.replace_all(&result, "(");
    let result = CLOSE_PAREN_REGEX.replace_all(&result, ")");
    result.trim().to_string()
}

/// Number of tokens forming the longest clause keyword at the head of
/// `tokens`, or `0` when no clause starts there.
fn clause_span(tokens: &[&str], max_words: usize) -> usize {
    (1..=max_words.min(tokens.len()))
        .rev()
        .find(|&n| is_clause(&tokens[..n].join(" ")))
        .unwrap_or(0)
}

struct LineBuilder<'a> {
    options:    &'a FormatOptions,
    lines:      Vec<String>,
    current:    Vec<&'a str>,
    line_depth: usize
}

impl<'a> LineBuilder<'a> {
    fn push_token(&mut self, token: &'a str, depth: usize) {
        if self.current.is_empty() {
            self.line_depth = depth;
        }
        self.current.push(token);
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let line = format!(
            "{}{}",
            self.options.indent_by(self.line_depth),
            self.current.join(" ")
        );
        self.lines.push(line);
        self.current.clear();
    }

    fn separate_clause(&mut self) {
        self.flush();
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            for _ in 0..self.options.lines_between_clauses {
                self.lines.push(String::new());
            }
        }
    }
}

/// Break the statement into one line per clause and indent by paren depth.
///
/// Parenthesis depth is the net count of `(` over `)` seen so far, floored
/// at zero. A token that closes more parens than it opens ends its line
/// before the depth drops.
pub fn insert_line_breaks(sql: &str, options: &FormatOptions) -> String {
    let tokens: Vec<&str> = sql.split_whitespace().collect();
    let max_words = max_clause_words();
    let mut builder = LineBuilder {
        options,
        lines: Vec::new(),
        current: Vec::new(),
        line_depth: 0
    };
    let mut depth = 0usize;
    let mut i = 0;

    while i < tokens.len() {
        let span = clause_span(&tokens[i..], max_words);
        if span > 0 && i > 0 {
            builder.separate_clause();
        }
        let take = span.max(1);
        for &token in &tokens[i..i + take] {
            builder.push_token(token, depth);
            let opens = token.matches('(').count();
            let closes = token.matches(')').count();
            if opens > closes {
                depth += opens - closes;
            } else if closes > opens {
                builder.flush();
                depth = depth.saturating_sub(closes - opens);
            }
        }
        i += take;
    }
    builder.flush();
    builder.lines.join("\n")
}
