//! Build errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a token build
#[derive(Debug, Error)]
pub enum BuildError {
    /// Filesystem error
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// JSON error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Token export has an unexpected shape
    #[error("Invalid token input: {0}")]
    InvalidInput(String),

    /// Invalid build configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Strict build with skipped entities
    #[error("{count} token entities were skipped")]
    SkippedEntities {
        /// Number of distinct skipped entities
        count: usize,
    },
}

/// Result type for build operations
pub type Result<T> = std::result::Result<T, BuildError>;

impl BuildError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }
}
