//! Authentication option builders.
//!
//! Converts the credential fields of a [`Secret`](crate::secret::Secret)
//! into client options, materializing TLS credential files on demand.

mod basic;
mod fields;
mod options;
mod tls;

pub use basic::basic_auth_from_secret;
pub use fields::{Pairing, pairing};
pub use options::{ClientOption, client_options_from_secret};
pub use tls::{CA_FILE, CERT_FILE, KEY_FILE, CredentialFiles, tls_client_config_from_secret};
