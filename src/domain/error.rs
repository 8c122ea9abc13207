use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for launcher operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Neither bundle candidate exists as a directory.
    #[error("NaAPICodex.app not found. Looked in: {}", display_paths(.attempted))]
    BundleNotFound { attempted: Vec<PathBuf> },

    /// The quarantine attribute could not be removed.
    #[error("Failed to clear quarantine attribute: {details}")]
    QuarantineClearFailed { details: String },

    /// The configuration document is not a JSON object.
    #[error("Failed to parse {}: {details}", .path.display())]
    ConfigParseFailed { path: PathBuf, details: String },

    /// The configuration document exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ConfigReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration document could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    ConfigWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The OS open facility rejected the request.
    #[error("Failed to open bundle: {details}")]
    LaunchRequestFailed { status: Option<i32>, details: String },

    /// Parse error for companion settings.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
