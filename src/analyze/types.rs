use compact_str::CompactString;
use serde::Serialize;
use smallvec::SmallVec;

use crate::keywords::COMMANDS;

/// Type alias for small column vectors (typically < 8 elements)
pub type ColumnVec = SmallVec<[CompactString; 8]>;

/// Statement kind, named after its leading command keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum QueryType {
    Select,
    Insert,
    Update,
    Delete,
    Create,
    Alter,
    Drop,
    Truncate,
    Merge,
    Replace,
    Grant,
    Revoke,
    With,
    #[default]
    Unknown
}

impl QueryType {
    /// Map a command keyword to its query type, ignoring case
    pub fn from_keyword(word: &str) -> Self {
        let upper = word.to_uppercase();
        if !COMMANDS.contains(upper.as_str()) {
            return Self::Unknown;
        }
        match upper.as_str() {
            "SELECT" => Self::Select,
            "INSERT" => Self::Insert,
            "UPDATE" => Self::Update,
            "DELETE" => Self::Delete,
            "CREATE" => Self::Create,
            "ALTER" => Self::Alter,
            "DROP" => Self::Drop,
            "TRUNCATE" => Self::Truncate,
            "MERGE" => Self::Merge,
            "REPLACE" => Self::Replace,
            "GRANT" => Self::Grant,
            "REVOKE" => Self::Revoke,
            "WITH" => Self::With,
            _ => Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::Alter => "ALTER",
            Self::Drop => "DROP",
            Self::Truncate => "TRUNCATE",
            Self::Merge => "MERGE",
            Self::Replace => "REPLACE",
            Self::Grant => "GRANT",
            Self::Revoke => "REVOKE",
            Self::With => "WITH",
            Self::Unknown => "UNKNOWN"
        }
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table referenced in a `FROM` clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRef {
    pub name:  CompactString,
    pub alias: Option<CompactString>
}

/// Item of a `SELECT` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRef {
    pub expression: String,
    pub alias:      Option<CompactString>
}

/// Default join type when no qualifier precedes `JOIN`
pub const DEFAULT_JOIN_TYPE: &str = "INNER";

/// Join found anywhere in the statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinInfo {
    #[serde(rename = "type")]
    pub join_type: CompactString,
    pub table:     CompactString,
    pub condition: String
}

impl JoinInfo {
    pub fn is_inner(&self) -> bool {
        self.join_type.eq_ignore_ascii_case(DEFAULT_JOIN_TYPE)
    }
}

/// Sort direction of an `ORDER BY` item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Asc,
    Desc
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "ASC"),
            Self::Desc => write!(f, "DESC")
        }
    }
}

/// Item of an `ORDER BY` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSpec {
    pub column:    CompactString,
    pub direction: Direction
}

/// `LIMIT` / `OFFSET` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pagination {
    pub limit:  Option<u64>,
    pub offset: Option<u64>
}

/// How a bind parameter is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// `:name`
    Named,
    /// Positional `?`
    Placeholder
}

/// Bind parameter; positional ones get synthetic names `param1`, `param2`, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRef {
    pub name: CompactString,
    #[serde(rename = "type")]
    pub kind: ParameterKind
}

/// Structural summary of one SQL statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryAnalysis {
    #[serde(rename = "type")]
    pub query_type: QueryType,
    pub tables:     Vec<TableRef>,
    pub columns:    Vec<ColumnRef>,
    pub conditions: Vec<String>,
    pub joins:      Vec<JoinInfo>,
    pub order_by:   Vec<OrderSpec>,
    pub group_by:   ColumnVec,
    pub pagination: Pagination,
    pub parameters: Vec<ParameterRef>,
    pub subqueries: Vec<String>,
    pub complexity: u32
}
