//! The credential secret record consumed by the auth builders.
//!
//! A [`Secret`] is an opaque mapping of field name to byte payload plus a
//! display name used in error messages. It is typically sourced from a
//! Kubernetes Secret manifest, but nothing in this crate fetches or decrypts
//! secrets; callers hand over the already-decoded field map.

use crate::error::{CredentialError, CredentialResult};
use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Field holding the basic-auth username.
pub const FIELD_USERNAME: &str = "username";
/// Field holding the basic-auth password.
pub const FIELD_PASSWORD: &str = "password";
/// Field holding the raw client certificate bytes (not a path).
pub const FIELD_CERT: &str = "certFile";
/// Field holding the raw client key bytes (not a path).
pub const FIELD_KEY: &str = "keyFile";
/// Field holding the raw CA bundle bytes (not a path).
pub const FIELD_CA: &str = "caFile";

/// A named collection of credential fields.
///
/// Despite what the `certFile`/`keyFile`/`caFile` field names suggest, every
/// field carries raw payload bytes, never a path reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Secret {
    name: String,
    data: BTreeMap<String, Vec<u8>>,
}

/// Kubernetes Secret manifest, as far as this crate cares about it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecretManifest {
    metadata: Metadata,
    #[serde(default)]
    data: BTreeMap<String, String>,
    #[serde(default)]
    string_data: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct Metadata {
    name: String,
}

impl Secret {
    /// Create an empty secret with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: BTreeMap::new(),
        }
    }

    /// Add a field, builder style.
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.data.insert(field.into(), value.into());
        self
    }

    /// Display name of the secret, used only in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Payload of the given field. Absent fields read as empty.
    pub fn field(&self, field: &str) -> &[u8] {
        self.data.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Parse a Kubernetes-style Secret manifest from YAML.
    ///
    /// Entries under `data` are base64-decoded; entries under `stringData`
    /// are taken verbatim and override `data` entries of the same key.
    pub fn from_yaml(manifest: &str) -> CredentialResult<Self> {
        Self::from_manifest(serde_yaml::from_str(manifest)?)
    }

    /// Parse a Kubernetes-style Secret manifest from JSON.
    pub fn from_json(manifest: &str) -> CredentialResult<Self> {
        Self::from_manifest(serde_json::from_str(manifest)?)
    }

    /// Load a YAML Secret manifest from disk.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let manifest = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read secret manifest: {:?}", path))?;
        Self::from_yaml(&manifest)
            .with_context(|| format!("Failed to parse secret manifest: {:?}", path))
    }

    fn from_manifest(manifest: SecretManifest) -> CredentialResult<Self> {
        let mut secret = Secret::new(manifest.metadata.name);
        for (field, encoded) in manifest.data {
            let decoded = BASE64.decode(encoded.as_bytes()).map_err(|err| {
                CredentialError::Manifest(format!(
                    "field '{}' is not valid base64: {}",
                    field, err
                ))
            })?;
            secret.data.insert(field, decoded);
        }
        for (field, value) in manifest.string_data {
            secret.data.insert(field, value.into_bytes());
        }
        Ok(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_field_reads_empty() {
        let secret = Secret::new("empty");
        assert_eq!(secret.field(FIELD_USERNAME), b"");
        assert_eq!(secret.name(), "empty");
    }

    #[test]
    fn test_with_field() {
        let secret = Secret::new("creds").with_field(FIELD_USERNAME, "admin");
        assert_eq!(secret.field(FIELD_USERNAME), b"admin");
    }

    #[test]
    fn test_from_yaml_decodes_data() {
        let manifest = "\
apiVersion: v1
kind: Secret
metadata:
  name: regcred
data:
  username: YWRtaW4=
  password: aHVudGVyMg==
";
        let secret = Secret::from_yaml(manifest).unwrap();
        assert_eq!(secret.name(), "regcred");
        assert_eq!(secret.field(FIELD_USERNAME), b"admin");
        assert_eq!(secret.field(FIELD_PASSWORD), b"hunter2");
    }

    #[test]
    fn test_from_yaml_string_data_overrides_data() {
        let manifest = "\
metadata:
  name: regcred
data:
  password: b2xk
stringData:
  password: new
";
        let secret = Secret::from_yaml(manifest).unwrap();
        assert_eq!(secret.field(FIELD_PASSWORD), b"new");
    }

    #[test]
    fn test_from_yaml_invalid_base64() {
        let manifest = "\
metadata:
  name: regcred
data:
  username: '!!! not base64 !!!'
";
        let err = Secret::from_yaml(manifest).unwrap_err();
        assert!(matches!(err, CredentialError::Manifest(_)));
        assert!(err.to_string().contains("username"));
    }

    #[test]
    fn test_from_json() {
        let manifest = r#"{
            "metadata": {"name": "regcred"},
            "stringData": {"username": "admin"}
        }"#;
        let secret = Secret::from_json(manifest).unwrap();
        assert_eq!(secret.field(FIELD_USERNAME), b"admin");
    }

    #[test]
    fn test_from_yaml_missing_metadata_is_manifest_error() {
        let err = Secret::from_yaml("data: {}").unwrap_err();
        assert!(matches!(err, CredentialError::Manifest(_)));
    }
}
