//! The rotation-handler seam
//!
//! Each rotation target kind (GitLab today; others by registration) is a
//! handler implementing this trait. Handlers are registered in a
//! [`HandlerRegistry`](crate::HandlerRegistry) keyed by their credential-type
//! tag, so adding a target is a `register` call rather than an edit to the
//! orchestrator.

use crate::error::Result;
use async_trait::async_trait;
use rotator_core::Credential;

/// One rotation strategy for a credential-type tag.
///
/// # Thread Safety
///
/// Handlers must be `Send + Sync`; the orchestrator shares them behind `Arc`.
#[async_trait]
pub trait RotationHandler: Send + Sync {
    /// The credential-type tag this handler serves, e.g. `"gitlab"`.
    ///
    /// Used as the registry key and matched against [`Credential::kind`].
    fn credential_type(&self) -> &'static str;

    /// Rotate a single credential: provision the new key material and
    /// publish it at the credential's destination.
    ///
    /// # Errors
    ///
    /// Any provisioning or publishing error is returned unmodified; the
    /// orchestrator aborts the run on the first failure.
    async fn rotate(&self, credential: &Credential) -> Result<()>;
}
