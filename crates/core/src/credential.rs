//! The declarative credential-rotation record

use serde::{Deserialize, Serialize};

/// One key-rotation target and its destination variable.
///
/// Loaded from the `credentials` sequence of the configuration file.
/// Immutable once loaded; each record maps to exactly one rotation attempt
/// per run. Fields absent from the file default to the empty string so a
/// sparse record still deserializes (validation is the handler's concern).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credential {
    /// Credential-type tag used to look up a rotation handler
    /// (currently only `gitlab` has a registered handler)
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Name of the CI/CD variable to publish the new key under,
    /// e.g. `GOOGLE_APPLICATION_CREDENTIALS`
    #[serde(default)]
    pub variable: String,

    /// Email of the Google service account whose key is rotated
    #[serde(default)]
    pub service_account: String,

    /// Identifier of the GitLab project that owns the variable
    #[serde(default)]
    pub project_id: String,

    /// Google Cloud project that owns the service account
    #[serde(default)]
    pub google_project_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_record_defaults_to_empty_strings() {
        let cred: Credential = serde_yaml::from_str("type: gitlab").unwrap();
        assert_eq!(cred.kind, "gitlab");
        assert_eq!(cred.variable, "");
        assert_eq!(cred.service_account, "");
        assert_eq!(cred.project_id, "");
        assert_eq!(cred.google_project_id, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let cred: Credential =
            serde_yaml::from_str("type: gitlab\nregion: europe-west1").unwrap();
        assert_eq!(cred.kind, "gitlab");
    }
}
