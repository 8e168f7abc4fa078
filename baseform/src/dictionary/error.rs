//! Dictionary loading errors.
use std::io::Error;
use std::path::{Path, PathBuf};

/// Errors that can occur when loading a lemma dictionary.
///
/// Malformed lines are never an error; only an unreadable resource is.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The word list resource does not exist
    #[error("Dictionary resource not found: '{}'", .0.display())]
    NotFound(PathBuf),

    /// I/O error while opening or reading the word list resource
    #[error("I/O error reading dictionary '{}'", .0.display())]
    Io(PathBuf, #[source] Error),

    /// I/O error while reading a word list from a stream
    #[error("I/O error reading dictionary stream")]
    Read(#[source] Error),
}

impl LoadError {
    pub(crate) fn from_io(path: &Path, err: Error) -> LoadError {
        match err.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io(path.to_path_buf(), err),
        }
    }
}
