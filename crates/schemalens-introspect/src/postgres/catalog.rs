//! Typed catalog rows and the queries that produce them.

use async_trait::async_trait;

use schemalens_core::Result;

use crate::options::IntrospectOptions;
use crate::scope::SchemaScope;

/// Identity of a table within one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableId {
    pub schema: String,
    pub table: String,
}

impl TableId {
    pub fn new(schema: &str, table: &str) -> Self {
        Self {
            schema: schema.to_string(),
            table: table.to_string(),
        }
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.schema, self.table)
    }
}

/// Rows that belong to a single table.
pub trait TableRow {
    fn table_schema(&self) -> &str;
    fn table_name(&self) -> &str;

    fn table_id(&self) -> TableId {
        TableId::new(self.table_schema(), self.table_name())
    }
}

macro_rules! table_row {
    ($($row:ty),* $(,)?) => {
        $(impl TableRow for $row {
            fn table_schema(&self) -> &str {
                &self.table_schema
            }

            fn table_name(&self) -> &str {
                &self.table_name
            }
        })*
    };
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RawColumn {
    pub table_schema: String,
    pub table_name: String,
    /// `pg_class.relkind` of the owning relation.
    pub table_kind: i8,
    pub column_name: String,
    pub column_type: String,
    pub column_index: i16,
    pub column_default: Option<String>,
    pub column_nullable: bool,
}

/// Primary-key (`p`) or check (`c`) constraint.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RawConstraint {
    pub constraint_name: String,
    pub constraint_kind: i8,
    pub table_schema: String,
    pub table_name: String,
    pub columns: Vec<i16>,
    pub definition: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RawIndex {
    pub index_name: String,
    pub table_schema: String,
    pub table_name: String,
    pub columns: Vec<i16>,
    pub definition: Option<String>,
    pub is_unique: bool,
}

/// Descriptive text on a table (`column_name` is `None`) or on one of its columns.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RawComment {
    pub table_schema: String,
    pub table_name: String,
    pub column_name: Option<String>,
    pub comment: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RawRelation {
    pub constraint_name: String,
    pub table_schema: String,
    pub table_name: String,
    pub columns: Vec<i16>,
    pub target_schema: String,
    pub target_table: String,
    pub target_columns: Vec<i16>,
    /// Names of `target_columns`, position for position. Empty where the
    /// catalog had no matching attribute.
    pub target_names: Vec<String>,
}

table_row!(RawColumn, RawConstraint, RawIndex, RawComment, RawRelation);

/// Source of raw catalog rows, each query restricted to a [`SchemaScope`].
#[async_trait]
pub trait Catalog: Send {
    async fn columns(&mut self, scope: &SchemaScope) -> Result<Vec<RawColumn>>;
    async fn constraints(&mut self, scope: &SchemaScope) -> Result<Vec<RawConstraint>>;
    async fn indexes(&mut self, scope: &SchemaScope) -> Result<Vec<RawIndex>>;
    async fn comments(&mut self, scope: &SchemaScope) -> Result<Vec<RawComment>>;
    async fn relations(&mut self, scope: &SchemaScope) -> Result<Vec<RawRelation>>;
}

/// Everything fetched from the catalog for one extraction.
#[derive(Debug, Clone, Default)]
pub struct CatalogRows {
    pub columns: Vec<RawColumn>,
    pub constraints: Vec<RawConstraint>,
    pub indexes: Vec<RawIndex>,
    pub comments: Vec<RawComment>,
    pub relations: Vec<RawRelation>,
}

/// Issue the catalog queries one after another over the same session.
///
/// The first failing query aborts the remaining ones.
pub async fn fetch_catalog<C>(catalog: &mut C, opts: &IntrospectOptions) -> Result<CatalogRows>
where
    C: Catalog + ?Sized,
{
    let scope = SchemaScope::from_filter(opts.schema.as_deref());

    let columns = catalog.columns(&scope).await?;
    let constraints = catalog.constraints(&scope).await?;
    let indexes = if opts.include_indexes {
        catalog.indexes(&scope).await?
    } else {
        Vec::new()
    };
    let comments = if opts.include_comments {
        catalog.comments(&scope).await?
    } else {
        Vec::new()
    };
    let relations = catalog.relations(&scope).await?;

    Ok(CatalogRows {
        columns: in_scope(columns, &scope),
        constraints: in_scope(constraints, &scope),
        indexes: in_scope(indexes, &scope),
        comments: in_scope(comments, &scope),
        relations: in_scope(relations, &scope),
    })
}

fn in_scope<T: TableRow>(mut rows: Vec<T>, scope: &SchemaScope) -> Vec<T> {
    rows.retain(|row| scope.includes(row.table_schema()));
    rows
}
