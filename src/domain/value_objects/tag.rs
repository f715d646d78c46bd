//! Tag value object
//!
//! Short labels attached to students and reminders. Entities hold tags in a
//! set, so equality and ordering are derived for deduplication.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, ParseResult};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[[:alnum:]]+$").expect("valid tag regex"));

/// A validated tag name: a single alphanumeric word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tag names should be alphanumeric.";

    pub fn is_valid(value: &str) -> bool {
        TAG_RE.is_match(value)
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

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

impl TryFrom<&str> for Tag {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
