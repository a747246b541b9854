// ABOUTME: Error type for conversation history persistence.
// ABOUTME: Distinguishes I/O failures from malformed history files.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures raised while saving or loading a conversation history file.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The file could not be read, written, or moved into place.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold a valid message list.
    #[error("malformed history file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory history could not be encoded.
    #[error("failed to encode history: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl HistoryError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }
}
