//! Client options and the option composer.

use super::basic::basic_auth_from_secret;
use super::tls::{CredentialFiles, tls_client_config_from_secret};
use crate::error::CredentialResult;
use crate::secret::Secret;
use std::path::PathBuf;
use tracing::debug;

/// A single authentication option for the downstream repository client.
///
/// Options are opaque to this crate: they are constructed here and applied
/// by the client, in the order they were produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientOption {
    /// HTTP basic authentication credentials.
    BasicAuth { username: String, password: String },

    /// TLS client configuration referencing materialized credential files.
    /// `None` for any file that was not written.
    TlsClientConfig {
        cert_path: Option<PathBuf>,
        key_path: Option<PathBuf>,
        ca_path: Option<PathBuf>,
    },
}

/// Build the full option list for a secret: basic auth first, TLS second.
///
/// The returned [`CredentialFiles`] guard owns whatever the TLS step wrote;
/// basic auth never holds resources. On error nothing is returned and
/// nothing is left to release.
pub fn client_options_from_secret(
    secret: &Secret,
) -> CredentialResult<(Vec<ClientOption>, CredentialFiles)> {
    let mut options = Vec::new();

    if let Some(basic_auth) = basic_auth_from_secret(secret)? {
        options.push(basic_auth);
    }

    let (tls, files) = tls_client_config_from_secret(secret)?;
    if let Some(tls) = tls {
        options.push(tls);
    }

    debug!(
        secret = secret.name(),
        options = options.len(),
        "built client options"
    );
    Ok((options, files))
}
