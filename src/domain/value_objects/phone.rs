//! Phone value object

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, ParseResult};

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));

/// A validated phone number: digits only, at least 3 of them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long.";

    pub fn is_valid(value: &str) -> bool {
        PHONE_RE.is_match(value)
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

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Phone {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
