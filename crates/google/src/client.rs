//! Thin client for the IAM Admin v1 service-account key surface

use crate::auth::TokenSource;
use crate::error::{IamError, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use secrecy::ExposeSecret;
use serde::{Deserialize, Deserializer};

/// Production endpoint of the IAM Admin API.
pub const DEFAULT_BASE_URL: &str = "https://iam.googleapis.com";

/// A newly created service-account key.
///
/// `private_key_data` holds the decoded key-file bytes; the wire format
/// carries them base64-encoded in `privateKeyData`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccountKey {
    /// Full resource name,
    /// `projects/{project}/serviceAccounts/{email}/keys/{key_id}`
    pub name: String,
    /// Decoded private-key material (a JSON key file)
    #[serde(default, deserialize_with = "base64_bytes")]
    pub private_key_data: Vec<u8>,
}

/// Metadata of an existing key, as returned by the list call.
///
/// The list surface never includes private key material.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetadata {
    /// Full resource name of the key
    pub name: String,
    /// Start of the key's validity window (RFC 3339)
    #[serde(default)]
    pub valid_after_time: String,
    /// End of the key's validity window (RFC 3339)
    #[serde(default)]
    pub valid_before_time: String,
}

#[derive(Debug, Deserialize)]
struct ListKeysResponse {
    #[serde(default)]
    keys: Vec<KeyMetadata>,
}

fn base64_bytes<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded = String::deserialize(deserializer)?;
    BASE64
        .decode(encoded.as_bytes())
        .map_err(serde::de::Error::custom)
}

/// Call-through client for service-account key provisioning.
///
/// Holds no state beyond the HTTP handle and token source; every operation
/// is a single remote call with no retry or caching.
#[derive(Debug)]
pub struct IamClient {
    http: reqwest::Client,
    base_url: String,
    token: TokenSource,
}

impl IamClient {
    /// Create a client against the production endpoint.
    #[must_use]
    pub fn new(token: TokenSource) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a client against an explicit endpoint (e.g. a test server).
    #[must_use]
    pub fn with_base_url(token: TokenSource, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token,
        }
    }

    /// Create a new key for a service account.
    ///
    /// The account email is percent-encoded when embedded in the resource
    /// name. Returns the full key object including private key bytes.
    ///
    /// # Errors
    ///
    /// Propagates the remote error verbatim as [`IamError::Api`]
    /// (permission denied, account not found, ...).
    pub async fn create_service_account_key(
        &self,
        project: &str,
        service_account: &str,
    ) -> Result<ServiceAccountKey> {
        let url = format!(
            "{}/v1/projects/{}/serviceAccounts/{}/keys",
            self.base_url,
            project,
            urlencoding::encode(service_account),
        );
        tracing::debug!(project, service_account, "creating service account key");
        let token = self.token.access_token().await?;
        let response = self
            .http
            .post(&url)
            .bearer_auth(token.expose_secret())
            .json(&serde_json::json!({}))
            .send()
            .await?;
        let body = Self::success_body(response).await?;
        serde_json::from_str(&body).map_err(|e| IamError::decode(e.to_string()))
    }

    /// List the existing keys of a service account.
    ///
    /// # Errors
    ///
    /// Propagates the remote error verbatim as [`IamError::Api`].
    pub async fn list_service_account_keys(
        &self,
        project: &str,
        service_account: &str,
    ) -> Result<Vec<KeyMetadata>> {
        let url = format!(
            "{}/v1/projects/{}/serviceAccounts/{}/keys",
            self.base_url, project, service_account,
        );
        let token = self.token.access_token().await?;
        let response = self
            .http
            .get(&url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;
        let body = Self::success_body(response).await?;
        let list: ListKeysResponse =
            serde_json::from_str(&body).map_err(|e| IamError::decode(e.to_string()))?;
        Ok(list.keys)
    }

    /// Delete a service-account key by its key id.
    ///
    /// Not called from the rotation path; the superseded key is left in
    /// place after rotation.
    ///
    /// # Errors
    ///
    /// Propagates the remote error verbatim as [`IamError::Api`].
    pub async fn delete_service_account_key(
        &self,
        project: &str,
        service_account: &str,
        key_id: &str,
    ) -> Result<()> {
        let url = format!(
            "{}/v1/projects/{}/serviceAccounts/{}/keys/{}",
            self.base_url, project, service_account, key_id,
        );
        tracing::debug!(project, service_account, key_id, "deleting service account key");
        let token = self.token.access_token().await?;
        let response = self
            .http
            .delete(&url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;
        Self::success_body(response).await?;
        Ok(())
    }

    async fn success_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            return Ok(body);
        }
        Err(IamError::Api {
            status: status.as_u16(),
            message: api_message(&body),
        })
    }
}

/// Pull the human-readable message out of a Google error envelope,
/// falling back to the raw body.
fn api_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct Envelope {
        error: Inner,
    }
    #[derive(Deserialize)]
    struct Inner {
        message: String,
    }
    serde_json::from_str::<Envelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_key_data_is_base64_decoded() {
        let body = r#"{"name":"projects/p/serviceAccounts/a/keys/k","privateKeyData":"U0VDUkVU"}"#;
        let key: ServiceAccountKey = serde_json::from_str(body).unwrap();
        assert_eq!(key.private_key_data, b"SECRET");
    }

    #[test]
    fn missing_private_key_data_defaults_to_empty() {
        let body = r#"{"name":"projects/p/serviceAccounts/a/keys/k"}"#;
        let key: ServiceAccountKey = serde_json::from_str(body).unwrap();
        assert!(key.private_key_data.is_empty());
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let body = r#"{"name":"k","privateKeyData":"not base64!"}"#;
        assert!(serde_json::from_str::<ServiceAccountKey>(body).is_err());
    }

    #[test]
    fn api_message_prefers_error_envelope() {
        let body = r#"{"error":{"code":403,"message":"Permission denied","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(api_message(body), "Permission denied");
    }

    #[test]
    fn api_message_falls_back_to_raw_body() {
        assert_eq!(api_message("plain failure"), "plain failure");
    }
}
