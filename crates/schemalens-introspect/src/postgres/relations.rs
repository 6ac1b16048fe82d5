use schemalens_core::{ColumnLink, Relation, TableRef};

use super::catalog::{RawRelation, TableId, TableRow};
use super::resolver::ColumnResolver;
use crate::group::group_by;

/// Resolve foreign-key rows into relations, one per constraint.
///
/// Source ordinals resolve against the source table and target ordinals
/// against the target table; the i-th source column is linked to the i-th
/// target column only.
pub fn map_relations(raw: Vec<RawRelation>, resolver: &ColumnResolver) -> Vec<Relation> {
    group_by(raw, |fk: &RawRelation| (fk.table_id(), fk.constraint_name.clone()))
        .into_iter()
        .filter_map(|((source_id, name), group)| {
            let fk = group.into_iter().next()?;
            let target_id = TableId::new(&fk.target_schema, &fk.target_table);

            let columns = fk
                .columns
                .iter()
                .zip(&fk.target_columns)
                .map(|(source, target)| ColumnLink {
                    source: resolver.resolve(&source_id, *source).to_string(),
                    target: resolver.resolve(&target_id, *target).to_string(),
                })
                .collect();

            Some(Relation {
                name,
                source: TableRef {
                    schema: source_id.schema,
                    table: source_id.table,
                },
                target: TableRef {
                    schema: target_id.schema,
                    table: target_id.table,
                },
                columns,
            })
        })
        .collect()
}
