//! Credentials
//!
//! Handles the username/password value type and parsing of credential lines.

pub mod credentials;
pub mod results;
pub mod validator;

pub use credentials::Credentials;
pub use results::ParseOutcome;
pub use validator::{COMMENT_PREFIX, DEFAULT_DELIMITER, is_comment, parse_line};
