//! Error types for logmunge
//!
//! Provides a unified error type for all operations.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using MungeError
pub type Result<T> = std::result::Result<T, MungeError>;

/// What a line was expected to contain when it failed to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// One of the two verbatim run-metadata lines
    Metadata,

    /// `<digits> generations`
    Generation,

    /// `<digits>.<digits> seconds`
    Duration,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Metadata => write!(f, "run metadata line"),
            Expected::Generation => write!(f, "'<n> generations'"),
            Expected::Duration => write!(f, "'<n.n> seconds'"),
        }
    }
}

fn describe_found(found: &Option<String>) -> String {
    match found {
        Some(line) => format!("{:?}", line.trim_end()),
        None => "end of input".to_string(),
    }
}

/// Unified error type for logmunge operations
#[derive(Debug, Error)]
pub enum MungeError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Parse Errors
    // -------------------------------------------------------------------------
    #[error("line {line_number}: expected {expected}, found {}", describe_found(.found))]
    NoMatch {
        expected: Expected,
        line_number: usize,
        found: Option<String>,
    },

    // -------------------------------------------------------------------------
    // Naming Errors
    // -------------------------------------------------------------------------
    #[error("cannot derive output name from {name:?}: expected exactly one '.'")]
    AmbiguousName { name: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MungeError {
    /// Attach a path to an I/O failure
    pub fn file_access(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        MungeError::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Rewrap a pathless I/O error with the file it happened on; other
    /// variants pass through unchanged.
    pub fn with_path(self, path: impl AsRef<Path>) -> Self {
        match self {
            MungeError::Io(source) => MungeError::file_access(path, source),
            other => other,
        }
    }
}
