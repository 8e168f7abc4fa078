//! Analysis setup errors.
use std::path::PathBuf;

use crate::dictionary::LoadError;

/// Errors that can occur while building an [`AnalysisRegistry`](super::AnalysisRegistry).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AnalysisError {
    /// Error reading the settings file
    #[error("Failed to read settings file '{}'", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    /// Settings document is not valid
    #[error("Failed to parse analysis settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// Dictionary of a configured filter could not be loaded
    #[error("Failed to load dictionary for filter '{0}'")]
    Load(String, #[source] LoadError),
}
