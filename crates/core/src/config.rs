//! Configuration file loading

use crate::credential::Credential;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The declarative rotation configuration.
///
/// Top-level shape of the YAML file:
///
/// ```yaml
/// credentials:
///   - type: gitlab
///     variable: GOOGLE_APPLICATION_CREDENTIALS
///     service_account: ci-deployer@my-project.iam.gserviceaccount.com
///     project_id: "12345"
///     google_project_id: my-project
/// ```
///
/// A file without a `credentials` key is valid and yields an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Rotation targets, processed in file order
    #[serde(default)]
    pub credentials: Vec<Credential>,
}

impl Config {
    /// Load and deserialize the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unreadable`] when the file cannot be read and
    /// [`Error::Malformed`] when its contents are not well-formed YAML.
    /// On error no partially-populated configuration is produced.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::unreadable(path, e))?;
        let config = serde_yaml::from_str(&raw)?;
        Ok(config)
    }
}
