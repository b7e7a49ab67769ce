//! Pure predicates over paired credential fields.

/// Presence of a pair of fields that require each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// Both fields are absent or empty; the credential was not requested.
    Neither,
    /// Both fields carry a value.
    Both,
    /// Exactly one field carries a value; the secret is inconsistent.
    Mismatched,
}

/// Classify two fields that are only valid together.
pub fn pairing(first: &[u8], second: &[u8]) -> Pairing {
    match (first.is_empty(), second.is_empty()) {
        (true, true) => Pairing::Neither,
        (false, false) => Pairing::Both,
        _ => Pairing::Mismatched,
    }
}
