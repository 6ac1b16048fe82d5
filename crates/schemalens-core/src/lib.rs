//! Core contracts for schemalens.
//!
//! This crate defines the schema snapshot model, the shared error type,
//! connection URL handling and snapshot validation used by the extractors
//! and the CLI.

pub mod connection;
pub mod constraints;
pub mod error;
pub mod redaction;
pub mod schema;
pub mod validation;

pub use connection::{ConnectionParams, parse_url, url_scheme};
pub use constraints::{
    Check, ColumnLink, Index, PrimaryKey, Relation, TableRef, UNKNOWN_COLUMN, Unique,
};
pub use error::{Error, ErrorKind, Result};
pub use redaction::redact_url;
pub use schema::{Column, DatabaseSchema, Table};
pub use validation::validate_schema;
