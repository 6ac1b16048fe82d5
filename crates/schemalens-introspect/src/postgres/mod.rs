//! PostgreSQL backend.

use async_trait::async_trait;

use schemalens_core::{ConnectionParams, DatabaseSchema, Result, parse_url, redact_url};

use crate::extractor::Extractor;
use crate::options::IntrospectOptions;
use crate::session::{Session, scoped};

pub mod catalog;
pub mod connection;
mod mapper;
mod queries;
mod relations;
mod resolver;
mod utils;

pub use catalog::{
    Catalog, CatalogRows, RawColumn, RawComment, RawConstraint, RawIndex, RawRelation, TableId,
    fetch_catalog,
};
pub use connection::with_connection;
pub use queries::PgCatalog;
pub use resolver::ColumnResolver;

/// Extractor reading the Postgres system catalogs.
#[derive(Debug, Clone)]
pub struct PostgresExtractor {
    params: ConnectionParams,
    redacted_url: String,
}

impl PostgresExtractor {
    pub fn from_url(url: &str) -> Self {
        Self {
            params: parse_url(url),
            redacted_url: redact_url(url),
        }
    }

    pub fn params(&self) -> &ConnectionParams {
        &self.params
    }
}

#[async_trait]
impl Extractor for PostgresExtractor {
    fn engine(&self) -> &'static str {
        "postgres"
    }

    async fn get_schema(&self, opts: &IntrospectOptions) -> Result<DatabaseSchema> {
        tracing::debug!(url = %self.redacted_url, schema = ?opts.schema, "extraction started");
        let opts = opts.clone();
        with_connection(&self.params, move |catalog| {
            Box::pin(run_extraction(catalog, opts))
        })
        .await
    }
}

/// Run a full extraction over an already opened session, closing it afterwards.
pub async fn extract<C>(session: C, opts: &IntrospectOptions) -> Result<DatabaseSchema>
where
    C: Catalog + Session + 'static,
{
    let opts = opts.clone();
    scoped(session, move |catalog| Box::pin(run_extraction(catalog, opts))).await
}

async fn run_extraction<C>(catalog: &mut C, opts: IntrospectOptions) -> Result<DatabaseSchema>
where
    C: Catalog + ?Sized,
{
    tracing::debug!("querying catalog");
    let rows = fetch_catalog(catalog, &opts).await?;
    tracing::debug!(columns = rows.columns.len(), "assembling schema");
    Ok(assemble(rows, &opts))
}

/// Build the snapshot from raw catalog rows.
pub fn assemble(rows: CatalogRows, opts: &IntrospectOptions) -> DatabaseSchema {
    let resolver =
        ColumnResolver::from_columns(&rows.columns).with_relation_targets(&rows.relations);
    let relations = relations::map_relations(rows.relations, &resolver);
    let tables = mapper::map_tables(
        rows.columns,
        rows.constraints,
        rows.indexes,
        rows.comments,
        &resolver,
        opts,
    );

    DatabaseSchema { tables, relations }
}
