//! Persistence of the log store to JSON files.

/// Primary/recovery JSON file sink.
pub mod json;

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or writing persisted log state.
///
/// A missing state file is not an error; [`json::JsonSink::load`] answers it
/// with an empty store.
#[derive(Debug, Error)]
pub enum PersistError {
    /// State file exists but could not be read.
    #[error("failed to read log database {}: {source}", .path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// State file is present but not parseable as a log database.
    #[error("log database {} is corrupt (file left untouched): {source}", .path.display())]
    Corrupt {
        /// Path of the corrupt file.
        path: PathBuf,
        /// Parse failure.
        source: serde_json::Error,
    },
    /// The in-memory store could not be serialized.
    #[error("failed to encode log database: {0}")]
    Encode(#[source] serde_json::Error),
    /// Serialized state could not be written out.
    #[error("failed to write log database {}: {source}", .path.display())]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;
