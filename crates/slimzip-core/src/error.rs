//! Error types for the cleanup pipeline.

use thiserror::Error;

/// Errors that abort a pipeline invocation.
///
/// Malformed input fails the whole run; no partial report or partial
/// archive is ever returned.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive container itself cannot be parsed.
    #[error("corrupt archive: {message}")]
    CorruptArchive { message: String },

    /// An entry's bytes could not be read.
    #[error("unreadable entry {path}: {source}")]
    UnreadableEntry {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The same path appears more than once in one archive.
    #[error("duplicate path in archive: {path}")]
    DuplicatePath { path: String },

    /// A surviving path could not be re-read during rewrite.
    #[error("entry missing from archive during rewrite: {path}")]
    MissingEntry { path: String },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArchiveError {
    /// Create a corrupt-archive error with a message.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::CorruptArchive {
            message: message.into(),
        }
    }

    /// Create an unreadable-entry error with path context.
    pub fn unreadable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::UnreadableEntry {
            path: path.into(),
            source,
        }
    }
}
