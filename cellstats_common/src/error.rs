//! Error types for scanning and reporting.
//!
//! Every error is a deterministic property of the input, so nothing is retried.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a statistics run.
#[derive(Debug, Error)]
pub enum CellStatsError {
    /// The input could not be opened or read.
    #[error("cannot read '{}': {source}", path.display())]
    FileAccess {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A `sky130_` identifier is missing from both reference tables.
    #[error("unknown cell '{identifier}' in '{}'", path.display())]
    UnknownIdentifier {
        /// File in which the identifier was found.
        path: PathBuf,
        /// The identifier, lossily decoded for display.
        identifier: String,
    },

    /// Writing the CSV report failed.
    #[error("failed to write report: {0}")]
    Report(#[from] csv::Error),
}

impl CellStatsError {
    /// Create a file access error.
    pub fn file_access(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an unknown identifier error from the raw matched bytes.
    pub fn unknown_identifier(path: impl AsRef<Path>, identifier: &[u8]) -> Self {
        Self::UnknownIdentifier {
            path: path.as_ref().to_path_buf(),
            identifier: String::from_utf8_lossy(identifier).into_owned(),
        }
    }

    /// Path of the input file the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileAccess { path, .. } | Self::UnknownIdentifier { path, .. } => Some(path),
            Self::Report(_) => None,
        }
    }
}

impl From<io::Error> for CellStatsError {
    fn from(err: io::Error) -> Self {
        Self::Report(csv::Error::from(err))
    }
}
