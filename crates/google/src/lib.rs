//! Google IAM service-account key provisioning for rotator
//!
//! A thin call-through client for the IAM Admin v1 key surface:
//! create, list and delete keys on a service account. Authentication is
//! negotiated at construction time via [`TokenSource`] — an explicit bearer
//! token when one is supplied, the `gcloud` CLI otherwise.
//!
//! The base URL is a constructor parameter so tests can point the client at
//! a local mock server instead of the production endpoint.

mod auth;
mod client;
mod error;

pub use auth::TokenSource;
pub use client::{DEFAULT_BASE_URL, IamClient, KeyMetadata, ServiceAccountKey};
pub use error::{IamError, Result};
