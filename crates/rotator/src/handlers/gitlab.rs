//! Rotation handler for GitLab-hosted credentials

use crate::error::{Error, Result};
use crate::handler::RotationHandler;
use async_trait::async_trait;
use rotator_core::Credential;
use rotator_gitlab::GitlabClient;
use rotator_google::IamClient;

/// Rotates a service-account key and publishes it as a project variable.
///
/// The sequence per credential is create-key then update-variable; when key
/// creation fails the variable is never touched. The superseded key is left
/// in place.
pub struct GitlabHandler {
    iam: IamClient,
    gitlab: GitlabClient,
}

impl GitlabHandler {
    /// Create a handler over the two injected clients.
    #[must_use]
    pub fn new(iam: IamClient, gitlab: GitlabClient) -> Self {
        Self { iam, gitlab }
    }
}

#[async_trait]
impl RotationHandler for GitlabHandler {
    fn credential_type(&self) -> &'static str {
        "gitlab"
    }

    async fn rotate(&self, credential: &Credential) -> Result<()> {
        let key = self
            .iam
            .create_service_account_key(
                &credential.google_project_id,
                &credential.service_account,
            )
            .await?;

        // The key file is JSON, so the bytes are expected to be UTF-8.
        let value = std::str::from_utf8(&key.private_key_data).map_err(|e| Error::Key {
            message: e.to_string(),
        })?;

        self.gitlab
            .update_variable(&credential.project_id, &credential.variable, value)
            .await?;

        tracing::info!(
            service_account = %credential.service_account,
            project = %credential.project_id,
            variable = %credential.variable,
            "rotated credential"
        );
        Ok(())
    }
}
