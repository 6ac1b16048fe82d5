use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constraints::{Check, Index, PrimaryKey, Relation, Unique};

/// Snapshot of a database's logical schema, produced by one extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSchema {
    /// Tables and views, sorted by `(schema, name)`.
    pub tables: Vec<Table>,
    /// Foreign-key relations, sorted by source table then name.
    pub relations: Vec<Relation>,
}

impl DatabaseSchema {
    /// Look up a table by its identity.
    pub fn table(&self, schema: &str, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|table| table.schema == schema && table.name == name)
    }
}

/// A table-like object (table, partitioned table, foreign table, view, materialized view).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub schema: String,
    pub name: String,
    pub is_view: bool,
    /// Columns in ordinal order.
    pub columns: Vec<Column>,
    pub primary_key: Option<PrimaryKey>,
    pub uniques: Vec<Unique>,
    pub indexes: Vec<Index>,
    pub checks: Vec<Check>,
    pub comment: Option<String>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}

/// Column metadata for a table-like object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,
    /// Rendered type, e.g. `character varying(255)`.
    #[serde(rename = "type")]
    pub column_type: String,
    pub nullable: bool,
    pub default: Option<String>,
    pub comment: Option<String>,
}
