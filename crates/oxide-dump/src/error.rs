//! Error types for dump conversion.

use std::path::PathBuf;

use oxide_dump_core::RewriteError;

/// Errors that can occur while converting a dump file.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input file does not exist.
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// The input file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Read {
        /// Path of the input file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write '{path}': {source}")]
    Write {
        /// Path of the output file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The rewrite pipeline could not be built.
    #[error("Rewrite error: {0}")]
    Rewrite(#[from] RewriteError),
}

/// Result type for conversions.
pub type Result<T> = std::result::Result<T, ConvertError>;
