//! Error types for the rotator-core crate

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors.
///
/// `Unreadable` and `Malformed` are distinct so diagnostics can tell a
/// missing/unreadable file apart from a file that exists but is not
/// well-formed YAML. Both abort the run before any credential is touched.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The configuration file could not be read
    #[error("failed to read configuration file {path}: {source}")]
    #[diagnostic(code(rotator_core::config::unreadable))]
    Unreadable {
        /// Path that was passed on the command line
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not well-formed YAML
    #[error("malformed configuration: {source}")]
    #[diagnostic(code(rotator_core::config::malformed))]
    Malformed {
        /// The underlying deserialization error
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    /// Create an unreadable-file error with path context
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Malformed { source }
    }
}

/// Result type for rotator-core operations
pub type Result<T> = std::result::Result<T, Error>;
