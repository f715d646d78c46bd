//! Email value object
//!
//! Structural `local@domain` validation. This is deliberately looser than
//! full RFC 5322; it matches what the desktop app accepts in its add/edit
//! commands.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, ParseResult};

// local-part: alphanumerics plus +_.- , starting and ending alphanumeric.
// domain: period-separated labels, hyphens allowed inside a label, final
// label at least 2 characters.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[[:alnum:]]([+_.\-]?[[:alnum:]])*@([[:alnum:]]([[:alnum:]\-]*[[:alnum:]])?\.)*[[:alnum:]][[:alnum:]\-]*[[:alnum:]]$",
    )
    .expect("valid email regex")
});

/// A validated email address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Emails should be of the format local-part@domain, where the local-part contains only \
         alphanumeric characters and the special characters +_.-, and the domain is made of \
         alphanumeric labels separated by periods.";

    pub fn is_valid(value: &str) -> bool {
        EMAIL_RE.is_match(value)
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

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Email {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
