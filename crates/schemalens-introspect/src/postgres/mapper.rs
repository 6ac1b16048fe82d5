use std::collections::HashMap;

use schemalens_core::{Check, Column, Index, PrimaryKey, Table, Unique};

use super::catalog::{RawColumn, RawComment, RawConstraint, RawIndex, TableId, TableRow};
use super::resolver::ColumnResolver;
use super::utils::{
    is_check, is_primary_key, is_view_relkind, strip_access_method, strip_check_keyword,
};
use crate::group::group_by;
use crate::options::IntrospectOptions;

/// Merge per-table catalog rows into tables sorted by `(schema, name)`.
pub fn map_tables(
    columns: Vec<RawColumn>,
    constraints: Vec<RawConstraint>,
    indexes: Vec<RawIndex>,
    comments: Vec<RawComment>,
    resolver: &ColumnResolver,
    opts: &IntrospectOptions,
) -> Vec<Table> {
    let mut constraints_by_table = group_by(constraints, |row: &RawConstraint| row.table_id());
    let mut indexes_by_table = group_by(indexes, |row: &RawIndex| row.table_id());
    let mut comments_by_table = group_by(comments, |row: &RawComment| row.table_id());

    group_by(columns, |row: &RawColumn| row.table_id())
        .into_iter()
        .filter_map(|(table_id, columns)| {
            let is_view = columns.iter().any(|col| is_view_relkind(col.table_kind));
            if is_view && !opts.include_views {
                return None;
            }

            let (comment, column_comments) =
                split_comments(comments_by_table.remove(&table_id).unwrap_or_default());
            let (primary_key, checks) = map_constraints(
                &table_id,
                constraints_by_table.remove(&table_id).unwrap_or_default(),
                resolver,
            );
            let (uniques, indexes) = map_indexes(
                &table_id,
                indexes_by_table.remove(&table_id).unwrap_or_default(),
                resolver,
            );

            Some(Table {
                schema: table_id.schema,
                name: table_id.table,
                is_view,
                columns: map_columns(columns, &column_comments),
                primary_key,
                uniques,
                indexes,
                checks,
                comment,
            })
        })
        .collect()
}

fn map_columns(mut raw: Vec<RawColumn>, comments: &HashMap<String, String>) -> Vec<Column> {
    raw.sort_by_key(|col| col.column_index);
    raw.into_iter()
        .map(|col| Column {
            comment: comments.get(&col.column_name).cloned(),
            name: col.column_name,
            column_type: col.column_type,
            nullable: col.column_nullable,
            default: col.column_default,
        })
        .collect()
}

/// Table-level comment plus column comments keyed by column name.
fn split_comments(raw: Vec<RawComment>) -> (Option<String>, HashMap<String, String>) {
    let mut table_comment = None;
    let mut column_comments = HashMap::new();

    for row in raw {
        match row.column_name {
            Some(column) => {
                column_comments.entry(column).or_insert(row.comment);
            }
            None => {
                table_comment.get_or_insert(row.comment);
            }
        }
    }

    (table_comment, column_comments)
}

fn map_constraints(
    table_id: &TableId,
    raw: Vec<RawConstraint>,
    resolver: &ColumnResolver,
) -> (Option<PrimaryKey>, Vec<Check>) {
    let (primary_keys, others): (Vec<_>, Vec<_>) = raw
        .into_iter()
        .partition(|con| is_primary_key(con.constraint_kind));

    // At most one primary key is expected; keep the first if the catalog disagrees.
    let primary_key = primary_keys.into_iter().next().map(|pk| PrimaryKey {
        columns: resolver.resolve_all(table_id, &pk.columns),
        name: Some(pk.constraint_name),
    });

    let checks = first_by_name(
        others
            .into_iter()
            .filter(|con| is_check(con.constraint_kind))
            .collect(),
        |con: &RawConstraint| con.constraint_name.clone(),
    )
    .into_iter()
    .map(|con| Check {
        columns: resolver.resolve_all(table_id, &con.columns),
        predicate: con.definition.as_deref().map(strip_check_keyword),
        name: con.constraint_name,
    })
    .collect();

    (primary_key, checks)
}

fn map_indexes(
    table_id: &TableId,
    raw: Vec<RawIndex>,
    resolver: &ColumnResolver,
) -> (Vec<Unique>, Vec<Index>) {
    let mut uniques = Vec::new();
    let mut indexes = Vec::new();

    for idx in first_by_name(raw, |idx: &RawIndex| idx.index_name.clone()) {
        let columns = resolver.resolve_all(table_id, &idx.columns);
        let definition = idx.definition.as_deref().map(strip_access_method);
        if idx.is_unique {
            uniques.push(Unique {
                name: idx.index_name,
                columns,
                definition,
            });
        } else {
            indexes.push(Index {
                name: idx.index_name,
                columns,
                definition,
            });
        }
    }

    (uniques, indexes)
}

/// One row per name, in name order; later rows with an already-seen name are dropped.
fn first_by_name<T, F>(rows: Vec<T>, name: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    group_by(rows, name)
        .into_values()
        .filter_map(|group| group.into_iter().next())
        .collect()
}
