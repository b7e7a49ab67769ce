//! Builds client authentication options for repository access from
//! credential secrets.
//!
//! Given a [`Secret`] (modeled after a Kubernetes Secret), this crate
//! produces the ordered list of [`ClientOption`]s an HTTP/Git-style client
//! needs: basic auth from `username`/`password`, and a TLS client config
//! whose certificate material is written to a scoped temporary directory
//! owned by the returned [`CredentialFiles`] guard.

pub mod auth;
pub mod error;
pub mod secret;

pub use auth::{
    ClientOption, CredentialFiles, basic_auth_from_secret, client_options_from_secret,
    tls_client_config_from_secret,
};
pub use error::{CredentialError, CredentialResult};
pub use secret::Secret;
