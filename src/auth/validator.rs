//! Credential line validator
//!
//! Implements the line-parsing rules for `user<delimiter>password` rows,
//! reporting which rule rejected a line.

use super::credentials::Credentials;
use crate::error::CredentialsError;

/// Marks a line as commented out.
pub const COMMENT_PREFIX: &str = "//";

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = ":";

const VALID_ROW_LENGTH: usize = 2;

/// Absent, empty and whitespace-only values are all blank.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Lines shorter than the prefix are never comments.
pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX)
}

/// Parses a single line into credentials.
pub fn parse_line(line: &str, delimiter: &str) -> Result<Credentials, CredentialsError> {
    if line.trim().is_empty() {
        return Err(CredentialsError::BlankLine);
    }

    if delimiter.is_empty() {
        return Err(CredentialsError::EmptyDelimiter);
    }

    if is_comment(line) {
        return Err(CredentialsError::CommentLine);
    }

    let row: Vec<&str> = line.split(delimiter).collect();
    if row.len() != VALID_ROW_LENGTH {
        return Err(CredentialsError::FieldCount(row.len()));
    }

    let user_name = row[0].trim();
    let user_password = row[1].trim();

    if user_name.is_empty() || user_password.is_empty() {
        return Err(CredentialsError::BlankField);
    }

    let credentials = Credentials::from_parts(user_name, user_password);
    if credentials.validate() {
        Ok(credentials)
    } else {
        Err(CredentialsError::Invalid)
    }
}
