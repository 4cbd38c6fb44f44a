//! Error types for the rotator-google crate

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by the IAM key client.
///
/// Remote failures are propagated verbatim as [`IamError::Api`]; the client
/// performs no retry or local recovery.
#[derive(Error, Debug, Diagnostic)]
pub enum IamError {
    /// An access token could not be obtained from the ambient environment
    #[error("failed to obtain Google access token: {message}")]
    #[diagnostic(code(rotator_google::auth))]
    Auth {
        /// Description of the token-sourcing failure
        message: String,
    },

    /// The IAM API returned a non-success status
    #[error("IAM API error (status {status}): {message}")]
    #[diagnostic(code(rotator_google::api))]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// The request could not be sent or the response not received
    #[error("IAM transport error: {0}")]
    #[diagnostic(code(rotator_google::transport))]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded
    #[error("failed to decode IAM response: {message}")]
    #[diagnostic(code(rotator_google::decode))]
    Decode {
        /// Description of the decoding failure
        message: String,
    },
}

impl IamError {
    /// Create a token-sourcing error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a response-decoding error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Result type for rotator-google operations
pub type Result<T> = std::result::Result<T, IamError>;
