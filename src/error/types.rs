//! Error types
//!
//! Defines domain-specific error types for credential parsing and loading.

use std::fmt;
use std::io;

/// Credential parsing and comparison errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    BlankLine,
    EmptyDelimiter,
    CommentLine,
    FieldCount(usize),
    BlankField,
    Invalid,
    Encoding,
    IncompatibleComparison(String),
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsError::BlankLine => write!(f, "Line is blank"),
            CredentialsError::EmptyDelimiter => write!(f, "Delimiter is empty"),
            CredentialsError::CommentLine => write!(f, "Line is commented out"),
            CredentialsError::FieldCount(n) => write!(f, "Expected 2 fields, found {}", n),
            CredentialsError::BlankField => write!(f, "User name or password is blank"),
            CredentialsError::Invalid => write!(f, "Credentials failed validation"),
            CredentialsError::Encoding => write!(f, "Line is not valid UTF-8"),
            CredentialsError::IncompatibleComparison(t) => {
                write!(f, "Object must be of type Credentials, got {}", t)
            }
        }
    }
}

impl std::error::Error for CredentialsError {}

/// Credential file loading errors
#[derive(Debug)]
pub enum LoaderError {
    Io(io::Error),
    Config(config::ConfigError),
    Rejected {
        line: usize,
        reason: CredentialsError,
    },
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Io(e) => write!(f, "I/O error: {}", e),
            LoaderError::Config(e) => write!(f, "Configuration error: {}", e),
            LoaderError::Rejected { line, reason } => {
                write!(f, "Line {} rejected: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::Io(e) => Some(e),
            LoaderError::Config(e) => Some(e),
            LoaderError::Rejected { reason, .. } => Some(reason),
        }
    }
}

impl From<io::Error> for LoaderError {
    fn from(error: io::Error) -> Self {
        LoaderError::Io(error)
    }
}

impl From<config::ConfigError> for LoaderError {
    fn from(error: config::ConfigError) -> Self {
        LoaderError::Config(error)
    }
}
