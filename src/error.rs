//! Typed errors for loading and querying record collections.
//!
//! Field-level problems never show up here directly: validators collect them
//! into a [`ValidationErrors`] map. They only escape as a [`TallyError`] when
//! the loader is told to abort on the first bad record.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, TallyError>;

#[derive(Debug, Error)]
pub enum TallyError {
    /// Loader aborted on the first record that failed validation.
    #[error("Validation error in record {index}: {errors}")]
    ValidationFailed {
        index: usize,
        errors: ValidationErrors,
    },

    /// An aggregation that needs at least one entity was run on none.
    #[error("{0} are not found")]
    EmptyCollection(&'static str),

    /// A query parameter was rejected before touching the collection.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A record reached the entity factory without satisfying its preconditions.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON from {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON document does not carry the array the source was pointed at.
    #[error("Not found key {key} in file: {}", path.display())]
    MissingKey { key: String, path: PathBuf },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TallyError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Field errors attached to a loader abort, if this is one.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::ValidationFailed { errors, .. } => Some(errors),
            _ => None,
        }
    }
}
