//! Error handlers
//!
//! Provides error reporting and exit code mapping.

use crate::error::types::LoaderError;
use log::error;

/// Handle a loader error
pub fn handle_error(err: &LoaderError) {
    error!("Credential loader error: {}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &LoaderError) -> i32 {
    match err {
        LoaderError::Io(_) => 74,
        LoaderError::Config(_) => 78,
        LoaderError::Rejected { .. } => 65,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CredentialsError;
    use std::io;

    #[test]
    fn test_exit_codes() {
        let io_err = LoaderError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert_eq!(error_to_exit_code(&io_err), 74);

        let rejected = LoaderError::Rejected {
            line: 3,
            reason: CredentialsError::BlankField,
        };
        assert_eq!(error_to_exit_code(&rejected), 65);
        assert_eq!(
            rejected.to_string(),
            "Line 3 rejected: User name or password is blank"
        );
    }
}
