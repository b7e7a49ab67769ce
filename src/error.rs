use std::fmt;

/// Error types for credential extraction and materialization
#[derive(Debug)]
pub enum CredentialError {
    /// A paired credential field is present without its partner
    InvalidCredentialFields {
        secret: String,
        fields: [&'static str; 2],
    },

    /// Temporary directory creation or credential file write failed
    Allocation(std::io::Error),

    /// Secret manifest could not be parsed or decoded
    Manifest(String),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::InvalidCredentialFields { secret, fields } => {
                write!(
                    f,
                    "invalid '{}' secret data: fields '{}' and '{}' require each other's presence",
                    secret, fields[0], fields[1]
                )
            }
            CredentialError::Allocation(err) => {
                write!(f, "failed to allocate credential files: {}", err)
            }
            CredentialError::Manifest(msg) => {
                write!(f, "failed to parse secret manifest: {}", msg)
            }
        }
    }
}

impl std::error::Error for CredentialError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CredentialError::Allocation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CredentialError {
    fn from(err: std::io::Error) -> Self {
        CredentialError::Allocation(err)
    }
}

impl From<serde_yaml::Error> for CredentialError {
    fn from(err: serde_yaml::Error) -> Self {
        CredentialError::Manifest(err.to_string())
    }
}

impl From<serde_json::Error> for CredentialError {
    fn from(err: serde_json::Error) -> Self {
        CredentialError::Manifest(err.to_string())
    }
}

/// Result type for credential operations
pub type CredentialResult<T> = Result<T, CredentialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fields_message_names_secret_and_fields() {
        let err = CredentialError::InvalidCredentialFields {
            secret: "regcred".to_string(),
            fields: ["username", "password"],
        };
        let msg = err.to_string();
        assert!(msg.contains("'regcred'"));
        assert!(msg.contains("'username'"));
        assert!(msg.contains("'password'"));
    }

    #[test]
    fn test_allocation_preserves_source() {
        use std::error::Error;

        let io = std::io::Error::other("disk full");
        let err = CredentialError::Allocation(io);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("disk full"));
    }
}
