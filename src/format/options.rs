use serde::{Deserialize, Serialize};

/// Options controlling SQL formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatOptions {
    /// Indentation unit repeated once per nesting level
    pub indent:                String,
    /// Rewrite keywords in uppercase
    pub uppercase:             bool,
    /// Wrap lines longer than this; `0` disables wrapping
    pub max_line_length:       usize,
    /// Blank lines inserted before each clause keyword
    pub lines_between_clauses: usize
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent:                String::from("  "),
            uppercase:             true,
            max_line_length:       80,
            lines_between_clauses: 1
        }
    }
}

/// Partial formatting options, merged field by field over defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormatOverrides {
    #[serde(default)]
    pub indent:                Option<String>,
    #[serde(default)]
    pub uppercase:             Option<bool>,
    #[serde(default)]
    pub max_line_length:       Option<usize>,
    #[serde(default)]
    pub lines_between_clauses: Option<usize>
}

impl FormatOverrides {
    /// Layer `other` on top of `self`; fields set in `other` win
    #[must_use]
    pub fn or_from(self, other: FormatOverrides) -> Self {
        Self {
            indent:                other.indent.or(self.indent),
            uppercase:             other.uppercase.or(self.uppercase),
            max_line_length:       other.max_line_length.or(self.max_line_length),
            lines_between_clauses: other.lines_between_clauses.or(self.lines_between_clauses)
        }
    }
}

impl FormatOptions {
    /// Apply overrides on top of these options
    #[must_use]
    pub fn merged(self, overrides: &FormatOverrides) -> Self {
        Self {
            indent:                overrides.indent.clone().unwrap_or(self.indent),
            uppercase:             overrides.uppercase.unwrap_or(self.uppercase),
            max_line_length:       overrides.max_line_length.unwrap_or(self.max_line_length),
            lines_between_clauses: overrides
                .lines_between_clauses
                .unwrap_or(self.lines_between_clauses)
        }
    }

    pub(crate) fn indent_by(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }
}

impl From<&FormatOverrides> for FormatOptions {
    fn from(overrides: &FormatOverrides) -> Self {
        Self::default().merged(overrides)
    }
}
