//! rotator CLI entry point
//!
//! Exits non-zero with a logged error on configuration or rotation failure,
//! zero with a rotated count otherwise.

use clap::Parser;
use rotator::cli::Cli;
use rotator::{GitlabHandler, HandlerRegistry, rotate_all};
use rotator_core::Config;
use rotator_gitlab::GitlabClient;
use rotator_google::{IamClient, TokenSource};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(rotated) => tracing::info!(count = rotated, "rotation complete"),
        Err(e) => {
            tracing::error!(error = %e, "rotation failed");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> rotator::Result<usize> {
    let config = Config::load(&cli.config_file)?;

    let token = TokenSource::negotiate(cli.google_access_token);
    let iam = match cli.iam_url {
        Some(url) => IamClient::with_base_url(token, url),
        None => IamClient::new(token),
    };
    let gitlab = match cli.gitlab_url {
        Some(url) => GitlabClient::with_base_url(cli.gitlab_token, url),
        None => GitlabClient::new(cli.gitlab_token),
    };

    let mut registry = HandlerRegistry::new();
    registry.register(Arc::new(GitlabHandler::new(iam, gitlab)));

    rotate_all(&registry, &config.credentials).await
}
