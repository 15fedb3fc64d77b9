//! Error types for the worksheet generator.

use std::io;
use thiserror::Error;

/// Result type alias for worksheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or saving a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The writer backend for the requested output format is not available.
    #[error("Missing dependency: {library} is required ({install})")]
    MissingDependency {
        /// Name of the missing backend library
        library: String,
        /// Command that makes the backend available
        install: String,
    },

    /// Error assembling the OOXML package.
    #[error("Packaging error: {0}")]
    Package(String),

    /// Error during rendering (DOCX, Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a missing-dependency error.
    pub fn missing_dependency(library: impl Into<String>, install: impl Into<String>) -> Self {
        Error::MissingDependency {
            library: library.into(),
            install: install.into(),
        }
    }

    /// Check if this error reports an unavailable writer backend.
    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, Error::MissingDependency { .. })
    }
}

#[cfg(feature = "docx")]
impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Package(err.to_string()),
        }
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Render(err.to_string())
    }
}
