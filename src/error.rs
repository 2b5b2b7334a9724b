//! Error types for the zigen table builder.

use std::path::PathBuf;
use thiserror::Error;

/// The error type for every fallible operation in this crate.
///
/// Irregular dictionary lines are never errors; they are skipped or passed
/// through by the readers. Only I/O and serialization failures abort a run.
#[derive(Debug, Error)]
pub enum ZigenError {
    /// An input dictionary could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file or its parent directory could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temporary output could not be moved over the destination.
    #[error("failed to persist {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },

    /// Serializing a table to JSON failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience `Result` type alias using [`ZigenError`].
pub type Result<T> = std::result::Result<T, ZigenError>;
