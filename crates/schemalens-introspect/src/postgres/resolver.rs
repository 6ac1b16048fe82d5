use std::collections::HashMap;

use schemalens_core::UNKNOWN_COLUMN;

use super::catalog::{RawColumn, RawRelation, TableId, TableRow};

/// Per-table lookup from column ordinal to column name.
///
/// Constraint, index and foreign-key catalogs reference columns by ordinal;
/// this turns those ordinals back into names.
#[derive(Debug, Clone, Default)]
pub struct ColumnResolver {
    tables: HashMap<TableId, HashMap<i16, String>>,
}

impl ColumnResolver {
    pub fn from_columns(columns: &[RawColumn]) -> Self {
        let mut tables: HashMap<TableId, HashMap<i16, String>> = HashMap::new();
        for column in columns {
            tables
                .entry(column.table_id())
                .or_default()
                .insert(column.column_index, column.column_name.clone());
        }
        Self { tables }
    }

    /// Add the target columns named by foreign-key rows.
    ///
    /// A scoped extraction does not read columns of referenced tables in
    /// other schemas; the relation rows carry those names. Columns already
    /// known from the column catalog are left as they are.
    pub fn with_relation_targets(mut self, relations: &[RawRelation]) -> Self {
        for fk in relations {
            let columns = self
                .tables
                .entry(TableId::new(&fk.target_schema, &fk.target_table))
                .or_default();
            for (ordinal, name) in fk.target_columns.iter().zip(&fk.target_names) {
                if *ordinal > 0 && !name.is_empty() {
                    columns.entry(*ordinal).or_insert_with(|| name.clone());
                }
            }
        }
        self
    }

    /// Name of the column at `ordinal`, or [`UNKNOWN_COLUMN`] when the ordinal
    /// is the expression sentinel `0`, a dropped column, or a table outside
    /// the extracted scope.
    pub fn resolve(&self, table: &TableId, ordinal: i16) -> &str {
        if ordinal <= 0 {
            return UNKNOWN_COLUMN;
        }
        self.tables
            .get(table)
            .and_then(|columns| columns.get(&ordinal))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_COLUMN)
    }

    pub fn resolve_all(&self, table: &TableId, ordinals: &[i16]) -> Vec<String> {
        ordinals
            .iter()
            .map(|ordinal| self.resolve(table, *ordinal).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(table: &str, name: &str, index: i16) -> RawColumn {
        RawColumn {
            table_schema: "public".to_string(),
            table_name: table.to_string(),
            table_kind: b'r' as i8,
            column_name: name.to_string(),
            column_type: "integer".to_string(),
            column_index: index,
            column_default: None,
            column_nullable: true,
        }
    }

    fn resolver() -> ColumnResolver {
        ColumnResolver::from_columns(&[
            column("users", "id", 1),
            column("users", "email", 2),
            column("users", "name", 3),
            column("orders", "id", 1),
        ])
    }

    #[test]
    fn resolves_ordinal_to_name() {
        let users = TableId::new("public", "users");
        assert_eq!(resolver().resolve(&users, 2), "email");
    }

    #[test]
    fn ordinal_zero_is_unknown() {
        let users = TableId::new("public", "users");
        assert_eq!(resolver().resolve(&users, 0), UNKNOWN_COLUMN);
    }

    #[test]
    fn missing_ordinal_or_table_is_unknown() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve(&TableId::new("public", "users"), 9),
            UNKNOWN_COLUMN
        );
        assert_eq!(
            resolver.resolve(&TableId::new("auth", "users"), 1),
            UNKNOWN_COLUMN
        );
    }

    fn fk_into(schema: &str, table: &str, ordinals: &[i16], names: &[&str]) -> RawRelation {
        RawRelation {
            constraint_name: "fk".to_string(),
            table_schema: "public".to_string(),
            table_name: "orders".to_string(),
            columns: vec![1; ordinals.len()],
            target_schema: schema.to_string(),
            target_table: table.to_string(),
            target_columns: ordinals.to_vec(),
            target_names: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    #[test]
    fn relation_targets_fill_tables_outside_the_column_scope() {
        let resolver =
            resolver().with_relation_targets(&[fk_into("auth", "users", &[3, 1], &["tenant", "id"])]);
        let auth_users = TableId::new("auth", "users");
        assert_eq!(resolver.resolve(&auth_users, 1), "id");
        assert_eq!(resolver.resolve(&auth_users, 3), "tenant");
        assert_eq!(resolver.resolve(&auth_users, 2), UNKNOWN_COLUMN);
    }

    #[test]
    fn relation_targets_never_override_known_columns() {
        let resolver =
            resolver().with_relation_targets(&[fk_into("public", "users", &[2, 4], &["renamed", ""])]);
        let users = TableId::new("public", "users");
        assert_eq!(resolver.resolve(&users, 2), "email");
        assert_eq!(resolver.resolve(&users, 4), UNKNOWN_COLUMN);
    }

    #[test]
    fn resolution_is_per_table() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve_all(&TableId::new("public", "orders"), &[1, 2]),
            vec!["id".to_string(), UNKNOWN_COLUMN.to_string()]
        );
    }
}
