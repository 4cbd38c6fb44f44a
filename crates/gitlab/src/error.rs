//! Error types for the rotator-gitlab crate

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by the variable publisher client.
///
/// Remote failures are propagated verbatim; no retry is performed.
#[derive(Error, Debug, Diagnostic)]
pub enum GitlabError {
    /// The GitLab API returned a non-success status
    #[error("GitLab API error (status {status}): {message}")]
    #[diagnostic(code(rotator_gitlab::api))]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// The request could not be sent or the response not received
    #[error("GitLab transport error: {0}")]
    #[diagnostic(code(rotator_gitlab::transport))]
    Transport(#[from] reqwest::Error),
}

/// Result type for rotator-gitlab operations
pub type Result<T> = std::result::Result<T, GitlabError>;
