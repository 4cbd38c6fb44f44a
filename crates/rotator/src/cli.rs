//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Rotate Google service-account keys into GitLab CI/CD variables.
///
/// Reads a declarative YAML list of rotation targets and performs one
/// create-key / publish-variable pass. Designed to run under an external
/// scheduler (e.g. a cron-triggered CI job).
#[derive(Parser, Debug)]
#[command(name = "rotator", version, about)]
pub struct Cli {
    /// The configuration file listing credentials to rotate
    #[arg(long = "config-file", default_value = "config.yaml")]
    pub config_file: PathBuf,

    /// Token used to authenticate against the GitLab API
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true)]
    pub gitlab_token: String,

    /// Base URL of the GitLab instance (self-hosted or a test server)
    #[arg(long, env = "GITLAB_URL")]
    pub gitlab_url: Option<String>,

    /// Base URL override for the IAM API (only useful against a test server)
    #[arg(long, env = "IAM_URL")]
    pub iam_url: Option<String>,

    /// Static Google access token; when unset, tokens are sourced from the
    /// gcloud CLI (application-default credentials)
    #[arg(long, env = "GOOGLE_OAUTH_ACCESS_TOKEN", hide_env_values = true)]
    pub google_access_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_defaults_to_config_yaml() {
        let cli = Cli::parse_from(["rotator", "--gitlab-token", "tok"]);
        assert_eq!(cli.config_file, PathBuf::from("config.yaml"));
        assert!(cli.gitlab_url.is_none());
        assert!(cli.iam_url.is_none());
        assert!(cli.google_access_token.is_none());
    }

    #[test]
    fn overrides_are_accepted() {
        let cli = Cli::parse_from([
            "rotator",
            "--config-file",
            "targets.yaml",
            "--gitlab-token",
            "tok",
            "--gitlab-url",
            "http://localhost:8080",
            "--iam-url",
            "http://localhost:8081",
        ]);
        assert_eq!(cli.config_file, PathBuf::from("targets.yaml"));
        assert_eq!(cli.gitlab_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cli.iam_url.as_deref(), Some("http://localhost:8081"));
    }
}
