//! Subject value object

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, ParseResult};

static SUBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("valid subject regex"));

/// A validated subject a student is taught: alphanumeric words, not blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Subject(String);

impl Subject {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Subjects should only contain alphanumeric characters and spaces, and it should not be blank.";

    pub fn is_valid(value: &str) -> bool {
        SUBJECT_RE.is_match(value)
    }

    pub fn new(value: impl Into<String>) -> ParseResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ParseError::InvalidFormat(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Subject {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
