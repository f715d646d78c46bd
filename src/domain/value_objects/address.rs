//! Address value object

use std::fmt;

use crate::error::{ParseError, ParseResult};

/// A validated address. Addresses can take any value as long as they are
/// not blank (the first character must not be whitespace).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank.";

    pub fn is_valid(value: &str) -> bool {
        value.chars().next().is_some_and(|c| !c.is_whitespace())
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

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Address {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
