//! Error types for folio-core

use std::path::PathBuf;

use thiserror::Error;

/// Folio error type
#[derive(Debug, Error)]
pub enum FolioError {
    /// Config file could not be parsed
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Site manifest could not be parsed
    #[error("invalid site manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Resume records could not be parsed
    #[error("invalid resume data {path}: {source}")]
    Resume {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Markdown document referenced by the manifest is missing
    #[error("content file for tab '{tab}' not found: {path}")]
    MissingContent { tab: String, path: PathBuf },

    /// Tab sequence has no tabs
    #[error("tab set is empty")]
    EmptyTabSet,

    /// Two tabs share an id
    #[error("duplicate tab id: {0}")]
    DuplicateTab(String),

    /// Tab id cannot be carried in a location fragment
    #[error("invalid tab id '{0}': ids must be non-empty and must not contain '/'")]
    InvalidTabId(String),

    /// Requested tab does not exist
    #[error("unknown tab: {0}")]
    UnknownTab(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across folio-core
pub type Result<T> = std::result::Result<T, FolioError>;
