//! rotator - service-account key rotation into CI/CD variables
//!
//! A single-shot batch job: load a declarative list of rotation targets,
//! then for each one create a new Google service-account key and publish its
//! key material as a file-type CI/CD variable on a GitLab project.
//!
//! Rotation targets are dispatched through a [`HandlerRegistry`]; external
//! crates can register additional [`RotationHandler`] implementations to
//! rotate other kinds of credentials:
//!
//! ```ignore
//! let mut registry = HandlerRegistry::new();
//! registry.register(Arc::new(GitlabHandler::new(iam, gitlab)));
//! let rotated = rotate_all(&registry, &config.credentials).await?;
//! ```

/// CLI argument parsing.
pub mod cli;
mod error;
mod handler;
/// Built-in handler implementations.
pub mod handlers;
mod registry;
mod rotate;

pub use error::{Error, Result};
pub use handler::RotationHandler;
pub use handlers::GitlabHandler;
pub use registry::HandlerRegistry;
pub use rotate::rotate_all;
