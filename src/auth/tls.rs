//! TLS credential materialization.
//!
//! Downstream clients take certificate material as file paths, so the raw
//! bytes carried by the secret are written to a fresh temporary directory.
//! The directory lives exactly as long as the [`CredentialFiles`] guard
//! returned alongside the option.

use super::fields::{Pairing, pairing};
use super::options::ClientOption;
use crate::error::{CredentialError, CredentialResult};
use crate::secret::{FIELD_CA, FIELD_CERT, FIELD_KEY, Secret};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// File name the client certificate is written to.
pub const CERT_FILE: &str = "cert.crt";
/// File name the client key is written to.
pub const KEY_FILE: &str = "key.crt";
/// File name the CA bundle is written to.
pub const CA_FILE: &str = "ca.pem";

/// Owner of the temporary directory holding materialized credentials.
///
/// Each successful materialization returns one guard owning exactly the
/// directory created during that call. [`CredentialFiles::release`] removes
/// the directory recursively and is safe to call more than once; an
/// unreleased guard removes the directory when dropped.
#[derive(Debug)]
pub struct CredentialFiles {
    dir: Option<TempDir>,
}

impl CredentialFiles {
    /// A guard that owns nothing; releasing it is a no-op.
    pub fn empty() -> Self {
        Self { dir: None }
    }

    fn owning(dir: TempDir) -> Self {
        Self { dir: Some(dir) }
    }

    /// Path of the owned directory, if any credentials were materialized.
    pub fn path(&self) -> Option<&Path> {
        self.dir.as_ref().map(TempDir::path)
    }

    /// Remove the owned directory and everything in it. Idempotent.
    pub fn release(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            match dir.close() {
                Ok(()) => debug!(path = %path.display(), "removed credential directory"),
                Err(err) => {
                    debug!(path = %path.display(), %err, "failed to remove credential directory")
                }
            }
        }
    }
}

/// Build a TLS client config option from the `certFile`/`keyFile`/`caFile`
/// fields, writing their payloads into a fresh temporary directory.
///
/// Secrets with none of the three fields are ignored; `certFile` and
/// `keyFile` require each other's presence and are validated before any
/// filesystem work. A failed write removes the directory before the error
/// is returned, so callers never observe a half-materialized directory.
pub fn tls_client_config_from_secret(
    secret: &Secret,
) -> CredentialResult<(Option<ClientOption>, CredentialFiles)> {
    let (cert, key, ca) = (
        secret.field(FIELD_CERT),
        secret.field(FIELD_KEY),
        secret.field(FIELD_CA),
    );
    if cert.is_empty() && key.is_empty() && ca.is_empty() {
        return Ok((None, CredentialFiles::empty()));
    }
    if pairing(cert, key) == Pairing::Mismatched {
        return Err(CredentialError::InvalidCredentialFields {
            secret: secret.name().to_string(),
            fields: [FIELD_CERT, FIELD_KEY],
        });
    }

    let dir = tempfile::Builder::new()
        .prefix(&format!("repo-tls-{}-", secret.name()))
        .tempdir()?;
    // Dropping `dir` on the error path removes everything written so far.
    let (cert_path, key_path, ca_path) = write_credential_files(dir.path(), cert, key, ca)?;
    debug!(
        secret = secret.name(),
        dir = %dir.path().display(),
        "materialized TLS credentials"
    );

    Ok((
        Some(ClientOption::TlsClientConfig {
            cert_path,
            key_path,
            ca_path,
        }),
        CredentialFiles::owning(dir),
    ))
}

fn write_credential_files(
    root: &Path,
    cert: &[u8],
    key: &[u8],
    ca: &[u8],
) -> std::io::Result<(Option<PathBuf>, Option<PathBuf>, Option<PathBuf>)> {
    let (mut cert_path, mut key_path, mut ca_path) = (None, None, None);

    if !cert.is_empty() && !key.is_empty() {
        let path = root.join(CERT_FILE);
        write_secret_file(&path, cert)?;
        cert_path = Some(path);

        let path = root.join(KEY_FILE);
        write_secret_file(&path, key)?;
        key_path = Some(path);
    }

    if !ca.is_empty() {
        let path = root.join(CA_FILE);
        write_secret_file(&path, ca)?;
        ca_path = Some(path);
    }

    Ok((cert_path, key_path, ca_path))
}

/// Write credential bytes to a new file readable only by the owning user.
fn write_secret_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(data)
}
