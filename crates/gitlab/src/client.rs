//! Thin client for the GitLab project-variables surface

use crate::error::{GitlabError, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// Production endpoint of the GitLab API.
pub const DEFAULT_BASE_URL: &str = "https://gitlab.com";

/// Storage type of a CI/CD variable.
///
/// Rotated keys are always published as [`VariableType::File`]: the
/// consuming CI job sees a path to a file holding the value rather than the
/// value itself, which is what Google client libraries expect for key files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    /// The variable's value is materialized as a file in the CI job
    File,
    /// The variable's value is injected as a plain environment variable
    EnvVar,
}

#[derive(Debug, Serialize)]
struct UpdateVariableRequest<'a> {
    value: &'a str,
    variable_type: VariableType,
}

/// Call-through client for updating project CI/CD variables.
#[derive(Debug)]
pub struct GitlabClient {
    http: reqwest::Client,
    base_url: String,
    token: SecretString,
}

impl GitlabClient {
    /// Create a client against gitlab.com.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a client against an explicit instance (self-hosted GitLab or
    /// a test server).
    #[must_use]
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token: SecretString::from(token.into()),
        }
    }

    /// Update the variable `key` of `project` to `value`, always as a
    /// file-type variable.
    ///
    /// `project` may be a numeric id or a `namespace/project` path; both are
    /// percent-encoded into the URL.
    ///
    /// # Errors
    ///
    /// Propagates the remote error verbatim as [`GitlabError::Api`]
    /// (forbidden, variable not found, ...).
    pub async fn update_variable(&self, project: &str, key: &str, value: &str) -> Result<()> {
        let url = format!(
            "{}/api/v4/projects/{}/variables/{}",
            self.base_url,
            urlencoding::encode(project),
            urlencoding::encode(key),
        );
        tracing::debug!(project, variable = key, "updating CI/CD variable");
        let response = self
            .http
            .put(&url)
            .header("PRIVATE-TOKEN", self.token.expose_secret())
            .json(&UpdateVariableRequest {
                value,
                variable_type: VariableType::File,
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response.text().await.unwrap_or_default();
        Err(GitlabError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&VariableType::File).unwrap(),
            r#""file""#
        );
        assert_eq!(
            serde_json::to_string(&VariableType::EnvVar).unwrap(),
            r#""env_var""#
        );
    }

    #[test]
    fn update_request_body_shape() {
        let body = serde_json::to_value(UpdateVariableRequest {
            value: "SECRET",
            variable_type: VariableType::File,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "value": "SECRET", "variable_type": "file" })
        );
    }
}
