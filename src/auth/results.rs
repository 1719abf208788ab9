//! Parsing result types
//!
//! Defines result structures returned by credential parsing operations.

use super::credentials::Credentials;

/// Result of parsing a credential line
///
/// On failure `credentials` is always `Credentials::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub success: bool,
    pub credentials: Credentials,
}

impl From<Option<Credentials>> for ParseOutcome {
    fn from(parsed: Option<Credentials>) -> Self {
        match parsed {
            Some(credentials) => Self {
                success: true,
                credentials,
            },
            None => Self::default(),
        }
    }
}
