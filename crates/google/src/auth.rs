//! Ambient Google credential negotiation
//!
//! Mode is picked at construction time rather than per call:
//! - an explicit bearer token (typically `GOOGLE_OAUTH_ACCESS_TOKEN` passed
//!   through the CLI) when one is supplied;
//! - otherwise the `gcloud` CLI, which resolves application-default
//!   credentials on the host.

use crate::error::{IamError, Result};
use secrecy::{ExposeSecret, SecretString};
use tokio::process::Command;

/// Source of bearer tokens for IAM API calls.
pub enum TokenSource {
    /// A fixed token supplied at construction time
    Static(SecretString),
    /// Shell out to `gcloud auth print-access-token` on each request
    GcloudCli,
}

impl TokenSource {
    /// Create a source that always returns the given token.
    #[must_use]
    pub fn from_static(token: impl Into<String>) -> Self {
        Self::Static(SecretString::from(token.into()))
    }

    /// Negotiate the source: explicit token when provided, `gcloud` otherwise.
    #[must_use]
    pub fn negotiate(explicit: Option<String>) -> Self {
        match explicit {
            Some(token) => Self::from_static(token),
            None => Self::GcloudCli,
        }
    }

    /// Obtain a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`IamError::Auth`] when the `gcloud` CLI cannot be executed
    /// or exits with a failure.
    pub async fn access_token(&self) -> Result<SecretString> {
        match self {
            Self::Static(token) => Ok(SecretString::from(token.expose_secret().to_owned())),
            Self::GcloudCli => gcloud_access_token().await,
        }
    }
}

impl std::fmt::Debug for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(_) => f.write_str("TokenSource::Static([REDACTED])"),
            Self::GcloudCli => f.write_str("TokenSource::GcloudCli"),
        }
    }
}

async fn gcloud_access_token() -> Result<SecretString> {
    let output = Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .await
        .map_err(|e| IamError::auth(format!("failed to execute gcloud CLI: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(IamError::auth(format!("gcloud CLI failed: {stderr}")));
    }

    Ok(SecretString::from(
        String::from_utf8_lossy(&output.stdout).trim().to_owned(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_source_returns_token() {
        let source = TokenSource::from_static("abc123");
        let token = source.access_token().await.unwrap();
        assert_eq!(token.expose_secret(), "abc123");
    }

    #[test]
    fn negotiate_prefers_explicit_token() {
        assert!(matches!(
            TokenSource::negotiate(Some("tok".into())),
            TokenSource::Static(_)
        ));
        assert!(matches!(
            TokenSource::negotiate(None),
            TokenSource::GcloudCli
        ));
    }

    #[test]
    fn debug_redacts_token() {
        let source = TokenSource::from_static("super-secret");
        let rendered = format!("{source:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
