use thiserror::Error;

/// Error type shared by every schemalens crate.
///
/// Each variant carries a human-readable message; callers that need to branch
/// on the failure category use [`Error::kind`].
#[derive(Debug, Error)]
pub enum Error {
    /// The connection URL names a backend no extractor is registered for.
    #[error("unsupported backend: {0}")]
    UnsupportedBackend(String),
    /// The database could not be reached, authenticated against, or released.
    #[error("connection error: {0}")]
    Connection(String),
    /// A catalog query failed or returned rows of an unexpected shape.
    #[error("query error: {0}")]
    Query(String),
    /// A snapshot violates the model's own invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

/// Field-less discriminant of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnsupportedBackend,
    Connection,
    Query,
    InvalidSchema,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedBackend(_) => ErrorKind::UnsupportedBackend,
            Error::Connection(_) => ErrorKind::Connection,
            Error::Query(_) => ErrorKind::Query,
            Error::InvalidSchema(_) => ErrorKind::InvalidSchema,
        }
    }

    /// Message without the category prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Error::UnsupportedBackend(msg)
            | Error::Connection(msg)
            | Error::Query(msg)
            | Error::InvalidSchema(msg) => msg,
        }
    }
}

/// Convenience alias for results returned by schemalens crates.
pub type Result<T> = std::result::Result<T, Error>;
