use std::io;
use std::path::PathBuf;

use schemalens_core::{Error as CoreError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read config {path}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Process exit status; extraction failures get one code per [`ErrorKind`].
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Core(err) => match err.kind() {
                ErrorKind::UnsupportedBackend => 3,
                ErrorKind::Connection => 4,
                ErrorKind::Query => 5,
                ErrorKind::InvalidSchema => 6,
            },
            CliError::InvalidConfig(_)
            | CliError::ConfigRead { .. }
            | CliError::ConfigParse { .. } => 2,
            CliError::Io(_) | CliError::Json(_) | CliError::Logging(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_extraction_kind_has_its_own_exit_code() {
        let codes: Vec<u8> = [
            CoreError::UnsupportedBackend("mysql".to_string()),
            CoreError::Connection("refused".to_string()),
            CoreError::Query("syntax".to_string()),
            CoreError::InvalidSchema("duplicate".to_string()),
        ]
        .into_iter()
        .map(|err| CliError::from(err).exit_code())
        .collect();

        assert_eq!(codes, vec![3, 4, 5, 6]);
    }

    #[test]
    fn configuration_errors_exit_with_usage_code() {
        let err = CliError::InvalidConfig("no url".to_string());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn core_errors_display_unchanged() {
        let err = CliError::from(CoreError::Connection("refused".to_string()));
        assert_eq!(err.to_string(), "connection error: refused");
    }
}
