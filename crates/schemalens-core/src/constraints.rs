use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Column name used when a catalog ordinal does not resolve to a column,
/// e.g. an expression member of an index.
pub const UNKNOWN_COLUMN: &str = "unknown";

/// Primary key definition preserving key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryKey {
    pub name: Option<String>,
    pub columns: Vec<String>,
}

/// Unique index definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Unique {
    pub name: String,
    pub columns: Vec<String>,
    /// Column/expression clause of the index, without the access method.
    pub definition: Option<String>,
}

/// Non-unique index definition. Primary-key and unique indexes are not listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub name: String,
    pub columns: Vec<String>,
    pub definition: Option<String>,
}

/// Check constraint definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    pub name: String,
    pub columns: Vec<String>,
    pub predicate: Option<String>,
}

/// Foreign-key link between two tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub name: String,
    pub source: TableRef,
    pub target: TableRef,
    /// Positionally paired columns: the i-th source column references the i-th target column.
    pub columns: Vec<ColumnLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableRef {
    pub schema: String,
    pub table: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLink {
    pub source: String,
    pub target: String,
}
