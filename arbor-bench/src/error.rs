//! Error types for harness runs

use std::fmt;
use std::path::PathBuf;

/// Errors that abort a harness run.
///
/// All of these are fatal: the harness never prints partial metrics.
#[derive(Debug, Clone)]
pub enum BenchError {
    /// The run was misconfigured (zero iterations, missing directory,
    /// empty corpus). Caught before any parsing happens.
    InvalidInput(String),
    /// A file could not be read, or directory traversal failed.
    Io { path: PathBuf, message: String },
    /// The parsing engine reported a failure.
    Engine { message: String },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::InvalidInput(message) => write!(f, "invalid input: {message}"),
            BenchError::Io { path, message } => {
                write!(f, "I/O error on {}: {}", path.display(), message)
            }
            BenchError::Engine { message } => write!(f, "parse engine error: {message}"),
        }
    }
}

impl std::error::Error for BenchError {}
