//! Error types for the registrar business crate.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected pagination input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("page size must be greater than zero")]
    InvalidPageSize,
    #[error("current page must be at least 1, got {0}")]
    InvalidCurrentPage(u32),
}

/// Failure reported by a record source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("record source unavailable: {0}")]
    Unavailable(String),
    #[error("query rejected: {0}")]
    Rejected(#[from] TableError),
}

/// Failure while writing an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Invalid console configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
    #[error("unknown role `{0}`")]
    UnknownRole(String),
}
