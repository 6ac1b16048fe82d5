use async_trait::async_trait;

use schemalens_core::{DatabaseSchema, Result};

use crate::options::IntrospectOptions;

/// Trait implemented by every backend that can extract a schema snapshot.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns the engine identifier (e.g. `postgres`).
    fn engine(&self) -> &'static str;

    /// Connect, read the catalogs and return a fresh snapshot.
    ///
    /// The connection opened for the call is closed before this returns,
    /// whatever the outcome.
    async fn get_schema(&self, opts: &IntrospectOptions) -> Result<DatabaseSchema>;
}
