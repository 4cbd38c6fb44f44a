//! GitLab CI/CD variable publishing for rotator
//!
//! A thin call-through client for the project-variables surface of the
//! GitLab v4 API. The only write operation the orchestrator needs is
//! [`GitlabClient::update_variable`], which always publishes the value as a
//! file-type variable.
//!
//! The base URL is a constructor parameter so the client can target a
//! self-hosted instance or a test server.

mod client;
mod error;

pub use client::{DEFAULT_BASE_URL, GitlabClient, VariableType};
pub use error::{GitlabError, Result};
