//! Core types for the rotator ecosystem
//!
//! Provides the [`Credential`] rotation record, the declarative [`Config`]
//! it is loaded from, and the configuration error taxonomy. Provider crates
//! (`rotator-google`, `rotator-gitlab`) and the orchestrator build on these
//! types; this crate stays free of network dependencies.

mod config;
mod credential;
mod error;

pub use config::Config;
pub use credential::Credential;
pub use error::{Error, Result};
