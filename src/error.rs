//! Error handling module for hdr-tourney
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Library code returns these types; the binary wraps them with anyhow.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tourney configuration library
#[derive(Error, Debug)]
pub enum TourneyError {
    /// IO errors from the storage backend, tagged with the failing path
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stage catalog errors (unreadable catalog, failed lookup)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid selection list input
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    /// Attempt to write a read-only configuration file
    #[error("Configuration file is read-only: {0}")]
    ReadOnly(String),
}

/// Result type alias for tourney configuration operations
pub type Result<T> = std::result::Result<T, TourneyError>;

impl TourneyError {
    /// Create an IO error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a read-only error
    pub fn read_only(msg: impl Into<String>) -> Self {
        Self::ReadOnly(msg.into())
    }
}

/// Errors produced by the selection list controller.
///
/// These are front-end consistency errors: a well-behaved front end never
/// offers an action that triggers one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("list already holds the maximum of {max} stages")]
    ListFull { max: usize },

    #[error("index {index} is out of range for a list of {len} stages")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no stage with display name '{0}'")]
    UnknownDisplayName(String),

    #[error("the stage catalog is empty")]
    EmptyCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TourneyError::catalog("stage db unreadable");
        assert_eq!(err.to_string(), "Catalog error: stage db unreadable");

        let err = TourneyError::from(SelectionError::ListFull { max: 7 });
        assert_eq!(
            err.to_string(),
            "Selection error: list already holds the maximum of 7 stages"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = TourneyError::io("/sd/ultimate", io_err);
        assert!(matches!(err, TourneyError::Io { ref path, .. } if path.ends_with("ultimate")));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<bool>("{").unwrap_err();
        let err: TourneyError = json_err.into();
        assert!(matches!(err, TourneyError::Json(_)));
    }
}
