use std::collections::BTreeMap;

use schemalens_core::{Error, Result, redact_url, url_scheme};

use crate::extractor::Extractor;
use crate::postgres::PostgresExtractor;

/// Builds an extractor for a connection URL. Must not connect.
pub type ExtractorBuilder = fn(&str) -> Result<Box<dyn Extractor>>;

/// Extractors keyed by URL scheme.
#[derive(Debug, Clone)]
pub struct ExtractorRegistry {
    builders: BTreeMap<String, ExtractorBuilder>,
}

impl ExtractorRegistry {
    /// Registry without any backend.
    pub fn empty() -> Self {
        Self {
            builders: BTreeMap::new(),
        }
    }

    /// Register `builder` for `scheme` (case-insensitive), replacing any previous entry.
    pub fn register(&mut self, scheme: &str, builder: ExtractorBuilder) -> &mut Self {
        self.builders.insert(scheme.to_ascii_lowercase(), builder);
        self
    }

    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }

    /// Select the extractor matching the URL scheme.
    ///
    /// Fails with [`Error::UnsupportedBackend`] before any connection attempt
    /// when the scheme is missing or unknown.
    pub fn get_extractor(&self, url: &str) -> Result<Box<dyn Extractor>> {
        let scheme = url_scheme(url).ok_or_else(|| {
            Error::UnsupportedBackend(format!("missing url scheme in '{}'", redact_url(url)))
        })?;

        let builder = self.builders.get(&scheme).ok_or_else(|| {
            Error::UnsupportedBackend(format!("no extractor registered for '{scheme}'"))
        })?;

        tracing::debug!(scheme = %scheme, "backend selected");
        builder(url)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("postgres", build_postgres)
            .register("postgresql", build_postgres);
        registry
    }
}

fn build_postgres(url: &str) -> Result<Box<dyn Extractor>> {
    Ok(Box::new(PostgresExtractor::from_url(url)))
}

/// Select an extractor from the default registry.
pub fn get_extractor(url: &str) -> Result<Box<dyn Extractor>> {
    ExtractorRegistry::default().get_extractor(url)
}
