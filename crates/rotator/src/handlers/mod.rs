//! Built-in rotation handlers
//!
//! - [`GitlabHandler`] - rotates a Google service-account key into a GitLab
//!   CI/CD variable (credential type `gitlab`)

mod gitlab;

pub use gitlab::GitlabHandler;
