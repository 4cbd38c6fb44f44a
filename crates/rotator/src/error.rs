//! Error type for a rotation run
//!
//! Every component error passes through unmodified; the orchestrator aborts
//! on the first one it sees.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort a rotation run.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Configuration could not be loaded
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] rotator_core::Error),

    /// Key provisioning failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Iam(#[from] rotator_google::IamError),

    /// Variable publishing failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Gitlab(#[from] rotator_gitlab::GitlabError),

    /// The created key material could not be published as a string
    #[error("key material is not valid UTF-8: {message}")]
    #[diagnostic(code(rotator::key))]
    Key {
        /// Description of the conversion failure
        message: String,
    },
}

/// Result type for rotation operations
pub type Result<T> = std::result::Result<T, Error>;
