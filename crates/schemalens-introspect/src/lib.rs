//! Schema extraction engine.
//!
//! A connection URL selects a backend through the [`ExtractorRegistry`]; the
//! backend opens one connection, reads the system catalogs and assembles a
//! [`DatabaseSchema`]. Only PostgreSQL is implemented.

pub mod extractor;
pub mod group;
pub mod options;
pub mod postgres;
pub mod registry;
pub mod scope;
pub mod session;

pub use extractor::Extractor;
pub use options::IntrospectOptions;
pub use postgres::PostgresExtractor;
pub use registry::{ExtractorBuilder, ExtractorRegistry, get_extractor};
pub use scope::SchemaScope;
pub use session::{Session, scoped};

pub use schemalens_core::{DatabaseSchema, Error, ErrorKind, Result};

/// Extract the schema behind `url`, optionally restricted to one schema.
pub async fn extract_schema(url: &str, schema: Option<&str>) -> Result<DatabaseSchema> {
    extract_schema_with_options(url, &IntrospectOptions::for_schema(schema)).await
}

/// Extract the schema behind `url` with caller-provided options.
pub async fn extract_schema_with_options(
    url: &str,
    opts: &IntrospectOptions,
) -> Result<DatabaseSchema> {
    get_extractor(url)?.get_schema(opts).await
}
