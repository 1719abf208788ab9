//! Credential value type
//!
//! An immutable username/password pair with case-insensitive user name
//! equality and ordering.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::debug;

use super::results::ParseOutcome;
use super::validator::{self, DEFAULT_DELIMITER, is_blank};
use crate::error::CredentialsError;

/// Username/password pair.
///
/// Construction never validates; use [`Credentials::validate`] or build
/// instances through [`Credentials::try_parse`].
#[derive(Clone, Default)]
pub struct Credentials {
    user_name: Option<String>,
    user_password: Option<String>,
}

/// Uppercases chars whose full uppercase mapping is a single char. Chars that
/// expand to several chars (`ß`, `ᾳ`) are kept unchanged, so a few titlecase
/// pairs such as U+1FB3/U+1FBC do not match.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Ordinal, case-insensitive comparison. Absent sorts before present.
fn compare_ignore_case(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.chars().map(fold_char).cmp(b.chars().map(fold_char)),
    }
}

/// Views an untyped value as credentials, looking through a boxed `dyn Any`.
fn downcast_credentials(other: &dyn Any) -> Option<&Credentials> {
    other.downcast_ref::<Credentials>().or_else(|| {
        other
            .downcast_ref::<Box<dyn Any>>()
            .and_then(|boxed| boxed.downcast_ref::<Credentials>())
    })
}

impl Credentials {
    /// Stores both values verbatim; absent fields stay absent.
    pub fn new(user_name: Option<String>, user_password: Option<String>) -> Self {
        Self {
            user_name,
            user_password,
        }
    }

    /// Builds credentials from two present values, stored verbatim.
    pub fn from_parts(user_name: impl Into<String>, user_password: impl Into<String>) -> Self {
        Self::new(Some(user_name.into()), Some(user_password.into()))
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn user_password(&self) -> Option<&str> {
        self.user_password.as_deref()
    }

    /// Both fields present and not blank.
    pub fn validate(&self) -> bool {
        !is_blank(self.user_name()) && !is_blank(self.user_password())
    }

    /// Parses `user<delimiter>password`, returning `None` for malformed or
    /// commented-out lines.
    pub fn try_parse(line: &str, delimiter: &str) -> Option<Self> {
        match validator::parse_line(line, delimiter) {
            Ok(credentials) => Some(credentials),
            Err(e) => {
                debug!("Rejected credential line: {}", e);
                None
            }
        }
    }

    /// Same as [`Credentials::try_parse`], as a success flag plus value.
    pub fn try_parse_outcome(line: &str, delimiter: &str) -> ParseOutcome {
        Self::try_parse(line, delimiter).into()
    }

    /// Canonical line form, `None` if either field is absent.
    pub fn to_line(&self, delimiter: &str) -> Option<String> {
        let user_name = self.user_name()?;
        let user_password = self.user_password()?;
        Some(format!("{user_name}{delimiter}{user_password}"))
    }

    /// Orders by user name only, ignoring case.
    pub fn compare(&self, other: &Self) -> Ordering {
        compare_ignore_case(self.user_name(), other.user_name())
    }

    /// Untyped comparison. `None` sorts before any credentials; any other
    /// type is a usage error.
    pub fn compare_any(&self, other: Option<&dyn Any>) -> Result<Ordering, CredentialsError> {
        let Some(other) = other else {
            return Ok(Ordering::Greater);
        };

        downcast_credentials(other)
            .map(|other| self.compare(other))
            .ok_or_else(|| {
                CredentialsError::IncompatibleComparison(format!("{:?}", other.type_id()))
            })
    }

    /// Untyped equality, false for any other type.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        downcast_credentials(other).is_some_and(|other| self == other)
    }
}

impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal && self.user_password == other.user_password
    }
}

impl Eq for Credentials {}

impl Hash for Credentials {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_name
            .as_ref()
            .map(|u| u.chars().map(fold_char).collect::<String>())
            .hash(state);
        self.user_password.hash(state);
    }
}

/// Operator sugar over [`Credentials::compare`].
///
/// User names that tie while passwords differ are unordered, since they are
/// not equal: `a <= b` and `a >= b` are both false there. Use
/// [`Credentials::compare`] for the username-only total order.
impl PartialOrd for Credentials {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare(other) {
            Ordering::Equal if self.user_password != other.user_password => None,
            ordering => Some(ordering),
        }
    }
}

impl FromStr for Credentials {
    type Err = CredentialsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validator::parse_line(s, DEFAULT_DELIMITER)
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:***", self.user_name().unwrap_or("<none>"))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_name", &self.user_name)
            .field("user_password", &self.user_password.as_ref().map(|_| "***"))
            .finish()
    }
}
