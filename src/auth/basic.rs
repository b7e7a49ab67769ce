//! Basic-auth extraction from a credential secret.

use super::fields::{Pairing, pairing};
use super::options::ClientOption;
use crate::error::{CredentialError, CredentialResult};
use crate::secret::{FIELD_PASSWORD, FIELD_USERNAME, Secret};

/// Build a basic-auth option from the `username`/`password` fields.
///
/// Secrets with neither field are ignored; a secret defining only one of the
/// two is rejected.
pub fn basic_auth_from_secret(secret: &Secret) -> CredentialResult<Option<ClientOption>> {
    let (username, password) = (secret.field(FIELD_USERNAME), secret.field(FIELD_PASSWORD));
    match pairing(username, password) {
        Pairing::Neither => Ok(None),
        Pairing::Mismatched => Err(CredentialError::InvalidCredentialFields {
            secret: secret.name().to_string(),
            fields: [FIELD_USERNAME, FIELD_PASSWORD],
        }),
        Pairing::Both => Ok(Some(ClientOption::BasicAuth {
            username: String::from_utf8_lossy(username).into_owned(),
            password: String::from_utf8_lossy(password).into_owned(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credentials_is_not_an_error() {
        let secret = Secret::new("plain");
        assert_eq!(basic_auth_from_secret(&secret).unwrap(), None);
    }

    #[test]
    fn test_username_without_password_fails() {
        let secret = Secret::new("half").with_field(FIELD_USERNAME, "admin");
        let err = basic_auth_from_secret(&secret).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'half'"));
        assert!(msg.contains("'username'"));
        assert!(msg.contains("'password'"));
    }

    #[test]
    fn test_password_without_username_fails() {
        let secret = Secret::new("half").with_field(FIELD_PASSWORD, "hunter2");
        assert!(basic_auth_from_secret(&secret).is_err());
    }

    #[test]
    fn test_both_fields_produce_option() {
        let secret = Secret::new("creds")
            .with_field(FIELD_USERNAME, "admin")
            .with_field(FIELD_PASSWORD, "hunter2");
        let option = basic_auth_from_secret(&secret).unwrap().unwrap();
        assert_eq!(
            option,
            ClientOption::BasicAuth {
                username: "admin".to_string(),
                password: "hunter2".to_string(),
            }
        );
    }
}
