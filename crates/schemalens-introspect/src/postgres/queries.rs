use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection};

use schemalens_core::{Error, Result};

use super::catalog::{Catalog, RawColumn, RawComment, RawConstraint, RawIndex, RawRelation};
use crate::scope::SchemaScope;

/// `pg_class.relkind` values extracted as tables or views.
const TABLE_RELKINDS: &str = "'r', 'p', 'f', 'v', 'm'";

/// Catalog backed by one exclusively owned Postgres connection.
#[derive(Debug)]
pub struct PgCatalog {
    pub(crate) conn: PgConnection,
}

impl PgCatalog {
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }
}

async fn fetch_rows<T>(
    conn: &mut PgConnection,
    query: &'static str,
    sql: &str,
    scope: &SchemaScope,
) -> Result<Vec<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let rows = sqlx::query_as::<_, T>(sql)
        .bind(scope.bind_value())
        .fetch_all(conn)
        .await
        .map_err(|err| Error::Query(format!("{query}: {err}")))?;

    tracing::debug!(query, rows = rows.len(), "catalog query finished");
    Ok(rows)
}

fn columns_sql() -> String {
    format!(
        r#"
        select
          n.nspname as table_schema,
          c.relname as table_name,
          c.relkind as table_kind,
          a.attname as column_name,
          pg_catalog.format_type(a.atttypid, a.atttypmod) as column_type,
          a.attnum as column_index,
          pg_catalog.pg_get_expr(d.adbin, d.adrelid) as column_default,
          not a.attnotnull as column_nullable
        from pg_catalog.pg_attribute a
        join pg_catalog.pg_class c on c.oid = a.attrelid
        join pg_catalog.pg_namespace n on n.oid = c.relnamespace
        left join pg_catalog.pg_attrdef d on d.adrelid = a.attrelid and d.adnum = a.attnum
        where c.relkind in ({TABLE_RELKINDS})
          and a.attnum > 0
          and not a.attisdropped
          and {scope}
        order by n.nspname, c.relname, a.attnum
        "#,
        scope = SchemaScope::predicate("n.nspname"),
    )
}

fn constraints_sql() -> String {
    format!(
        r#"
        select
          cn.conname as constraint_name,
          cn.contype as constraint_kind,
          n.nspname as table_schema,
          c.relname as table_name,
          coalesce(cn.conkey, '{{}}'::int2[]) as columns,
          pg_catalog.pg_get_constraintdef(cn.oid, true) as definition
        from pg_catalog.pg_constraint cn
        join pg_catalog.pg_class c on c.oid = cn.conrelid
        join pg_catalog.pg_namespace n on n.oid = c.relnamespace
        where cn.contype in ('p', 'c')
          and {scope}
        order by n.nspname, c.relname, cn.conname
        "#,
        scope = SchemaScope::predicate("n.nspname"),
    )
}

fn indexes_sql() -> String {
    format!(
        r#"
        select
          ic.relname as index_name,
          n.nspname as table_schema,
          c.relname as table_name,
          (string_to_array(i.indkey::text, ' ')::int2[])[1:i.indnkeyatts] as columns,
          pg_catalog.pg_get_indexdef(i.indexrelid) as definition,
          i.indisunique as is_unique
        from pg_catalog.pg_index i
        join pg_catalog.pg_class ic on ic.oid = i.indexrelid
        join pg_catalog.pg_class c on c.oid = i.indrelid
        join pg_catalog.pg_namespace n on n.oid = c.relnamespace
        where not i.indisprimary
          and c.relkind in ({TABLE_RELKINDS})
          and {scope}
        order by n.nspname, c.relname, ic.relname
        "#,
        scope = SchemaScope::predicate("n.nspname"),
    )
}

fn comments_sql() -> String {
    format!(
        r#"
        select
          n.nspname as table_schema,
          c.relname as table_name,
          a.attname as column_name,
          d.description as comment
        from pg_catalog.pg_description d
        join pg_catalog.pg_class c on c.oid = d.objoid
        join pg_catalog.pg_namespace n on n.oid = c.relnamespace
        left join pg_catalog.pg_attribute a
          on a.attrelid = c.oid and a.attnum = d.objsubid and d.objsubid > 0
        where d.classoid = 'pg_catalog.pg_class'::regclass
          and c.relkind in ({TABLE_RELKINDS})
          and (d.objsubid = 0 or a.attname is not null)
          and {scope}
        order by n.nspname, c.relname, d.objsubid
        "#,
        scope = SchemaScope::predicate("n.nspname"),
    )
}

fn relations_sql() -> String {
    format!(
        r#"
        select
          cn.conname as constraint_name,
          sn.nspname as table_schema,
          sc.relname as table_name,
          cn.conkey as columns,
          tn.nspname as target_schema,
          tc.relname as target_table,
          cn.confkey as target_columns,
          array(
            select coalesce(a.attname::text, '')
            from unnest(cn.confkey) with ordinality as k(attnum, ord)
            left join pg_catalog.pg_attribute a
              on a.attrelid = cn.confrelid and a.attnum = k.attnum
            order by k.ord
          ) as target_names
        from pg_catalog.pg_constraint cn
        join pg_catalog.pg_class sc on sc.oid = cn.conrelid
        join pg_catalog.pg_namespace sn on sn.oid = sc.relnamespace
        join pg_catalog.pg_class tc on tc.oid = cn.confrelid
        join pg_catalog.pg_namespace tn on tn.oid = tc.relnamespace
        where cn.contype = 'f'
          and {scope}
        order by sn.nspname, sc.relname, cn.conname
        "#,
        scope = SchemaScope::predicate("sn.nspname"),
    )
}

#[async_trait]
impl Catalog for PgCatalog {
    async fn columns(&mut self, scope: &SchemaScope) -> Result<Vec<RawColumn>> {
        fetch_rows(&mut self.conn, "columns", &columns_sql(), scope).await
    }

    async fn constraints(&mut self, scope: &SchemaScope) -> Result<Vec<RawConstraint>> {
        fetch_rows(&mut self.conn, "constraints", &constraints_sql(), scope).await
    }

    async fn indexes(&mut self, scope: &SchemaScope) -> Result<Vec<RawIndex>> {
        fetch_rows(&mut self.conn, "indexes", &indexes_sql(), scope).await
    }

    async fn comments(&mut self, scope: &SchemaScope) -> Result<Vec<RawComment>> {
        fetch_rows(&mut self.conn, "comments", &comments_sql(), scope).await
    }

    async fn relations(&mut self, scope: &SchemaScope) -> Result<Vec<RawRelation>> {
        fetch_rows(&mut self.conn, "relations", &relations_sql(), scope).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_query_is_scoped_on_its_table_schema() {
        for sql in [columns_sql(), constraints_sql(), indexes_sql(), comments_sql()] {
            assert!(sql.contains(&SchemaScope::predicate("n.nspname")));
        }
        assert!(relations_sql().contains(&SchemaScope::predicate("sn.nspname")));
    }

    #[test]
    fn index_members_exclude_included_columns() {
        assert!(indexes_sql().contains("[1:i.indnkeyatts] as columns"));
    }

    #[test]
    fn relation_targets_are_named_in_key_order() {
        let sql = relations_sql();
        assert!(sql.contains("unnest(cn.confkey) with ordinality"));
        assert!(sql.contains("order by k.ord"));
        assert!(sql.contains("as target_names"));
    }

    #[test]
    fn empty_array_literal_survives_formatting() {
        assert!(constraints_sql().contains("'{}'::int2[]"));
    }
}
